use api::{create_router, ApiDoc, AppState};
use services::product::service::ProductServiceImpl;
use services::subscription::service::SubscriptionServiceImpl;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Could not load .env file: {}", e);
        eprintln!("Continuing with environment variables...");
    }

    // Load configuration from environment
    let config = config::Config::from_env();

    // Initialize tracing; SERVICE_LEVEL drives the default filter
    let default_filter = format!(
        "info,api={level},services={level},database={level}",
        level = config.service.level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting {}...", config.service.name);
    tracing::info!(
        "Database: {}:{}/{}",
        config.database.host,
        config.database.port,
        config.database.name
    );

    // Create database and run migrations
    tracing::info!("Connecting to database...");
    let db = database::Database::from_config(&config.database).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    // Get repositories
    let product_repo = db.product_repository();
    let subscription_repo = db.subscription_repository();

    // Create services
    tracing::info!("Initializing services...");
    let product_service = Arc::new(ProductServiceImpl::new(product_repo.clone()));
    let subscription_service = Arc::new(SubscriptionServiceImpl::new(
        subscription_repo,
        product_repo,
    ));

    // Create application state
    let app_state = AppState {
        product_service: product_service as Arc<dyn services::product::ports::ProductService>,
        subscription_service: subscription_service
            as Arc<dyn services::subscription::ports::SubscriptionService>,
    };

    // Create router
    let app = create_router(app_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Start server
    let addr = format!("0.0.0.0:{}", config.service.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 Server listening on http://{}", addr);
    tracing::info!("📚 Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
