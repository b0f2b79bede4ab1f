use crate::{error::ApiError, models::ProductResponse, state::AppState};
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use services::ProductId;

/// List the product catalog
#[utoipa::path(
    get,
    path = "/api/products/",
    tag = "Products",
    responses(
        (status = 200, description = "Product catalog", body = Vec<ProductResponse>),
        (status = 500, description = "Internal server error", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn fetch_all_products(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = app_state.product_service.fetch_all_products().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Fetch a single product
#[utoipa::path(
    get,
    path = "/api/products/{product_id}",
    tag = "Products",
    params(
        ("product_id" = String, Path, description = "Product ID (UUID)")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Invalid product ID", body = crate::error::ApiErrorResponse),
        (status = 404, description = "Product not found", body = crate::error::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn fetch_product(
    State(app_state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let product_id = product_id
        .parse::<ProductId>()
        .map_err(|_| ApiError::bad_request("invalid product id"))?;

    let product = app_state.product_service.fetch_product(product_id).await?;

    Ok(Json(product.into()))
}

pub fn create_products_router() -> Router<AppState> {
    Router::new()
        .route("/api/products/", get(fetch_all_products))
        .route("/api/products/{product_id}", get(fetch_product))
}
