use utoipa::OpenApi;

/// OpenAPI documentation configuration
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Subscription Service API",
        description = "Manage fitness product subscriptions: browse the catalog, create subscriptions, and move them through their lifecycle.",
        version = "1.0.0",
        license(name = "MIT",)
    ),
    paths(
        crate::routes::health_check,
        // Product endpoints
        crate::routes::products::fetch_all_products,
        crate::routes::products::fetch_product,
        // Subscription endpoints
        crate::routes::subscriptions::create_subscription,
        crate::routes::subscriptions::fetch_subscription,
        crate::routes::subscriptions::update_subscription_status,
    ),
    components(schemas(
        // Request/Response models
        crate::models::CreateSubscriptionRequest,
        crate::models::ProductResponse,
        crate::models::SubscriptionResponse,
        crate::models::StatusMessageResponse,
        crate::error::ApiErrorResponse,
    )),
    tags(
        (name = "Health", description = "Service health endpoints"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Subscriptions", description = "Subscription lifecycle endpoints")
    )
)]
pub struct ApiDoc;
