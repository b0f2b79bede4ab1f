use crate::{
    error::ApiError,
    models::{CreateSubscriptionRequest, StatusMessageResponse, SubscriptionResponse},
    state::AppState,
};
use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use services::consts::DATE_FORMAT;
use services::subscription::ports::SubscriptionStatus;
use services::{ProductId, SubscriptionId};
use utoipa::IntoParams;

/// Query parameters for updating a subscription's status
#[derive(Debug, Deserialize, IntoParams)]
pub struct UpdateSubscriptionParams {
    /// Target status: inactive, active, paused, or cancelled
    pub status: Option<String>,
}

/// Create a new subscription
///
/// The start date decides the initial status: starting today makes the
/// subscription active immediately, a future date leaves it inactive, and a
/// past date is rejected.
#[utoipa::path(
    post,
    path = "/api/subscription/",
    tag = "Subscriptions",
    request_body = CreateSubscriptionRequest,
    responses(
        (status = 200, description = "Subscription created", body = StatusMessageResponse),
        (status = 400, description = "Invalid request", body = crate::error::ApiErrorResponse),
        (status = 404, description = "Product not found", body = crate::error::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn create_subscription(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateSubscriptionRequest>, JsonRejection>,
) -> Result<Json<StatusMessageResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let product_id = request
        .product_id
        .parse::<ProductId>()
        .map_err(|_| ApiError::bad_request("invalid product id"))?;

    let start_date = NaiveDate::parse_from_str(&request.start_date, DATE_FORMAT)
        .map_err(|_| ApiError::bad_request("invalid start date format, expected DD-MM-YYYY"))?;

    app_state
        .subscription_service
        .create_subscription(product_id, request.duration_in_months, start_date)
        .await?;

    Ok(Json(StatusMessageResponse::ok(
        "Successfully created subscription",
    )))
}

/// Fetch a subscription
#[utoipa::path(
    get,
    path = "/api/subscription/{subscription_id}",
    tag = "Subscriptions",
    params(
        ("subscription_id" = String, Path, description = "Subscription ID (UUID)")
    ),
    responses(
        (status = 200, description = "Subscription found", body = SubscriptionResponse),
        (status = 400, description = "Invalid subscription ID", body = crate::error::ApiErrorResponse),
        (status = 404, description = "Subscription not found", body = crate::error::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn fetch_subscription(
    State(app_state): State<AppState>,
    Path(subscription_id): Path<String>,
) -> Result<Json<SubscriptionResponse>, ApiError> {
    let subscription_id = subscription_id
        .parse::<SubscriptionId>()
        .map_err(|_| ApiError::bad_request("invalid subscription id"))?;

    let subscription = app_state
        .subscription_service
        .fetch_subscription(subscription_id)
        .await?;

    Ok(Json(subscription.into()))
}

/// Update a subscription's status
///
/// `cancelled` is terminal: once a subscription is cancelled, further
/// updates are rejected.
#[utoipa::path(
    patch,
    path = "/api/subscription/{subscription_id}",
    tag = "Subscriptions",
    params(
        ("subscription_id" = String, Path, description = "Subscription ID (UUID)"),
        UpdateSubscriptionParams
    ),
    responses(
        (status = 200, description = "Status updated", body = StatusMessageResponse),
        (status = 400, description = "Invalid request", body = crate::error::ApiErrorResponse),
        (status = 404, description = "Subscription not found", body = crate::error::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = crate::error::ApiErrorResponse)
    )
)]
pub async fn update_subscription_status(
    State(app_state): State<AppState>,
    Path(subscription_id): Path<String>,
    Query(params): Query<UpdateSubscriptionParams>,
) -> Result<Json<StatusMessageResponse>, ApiError> {
    let subscription_id = subscription_id
        .parse::<SubscriptionId>()
        .map_err(|_| ApiError::bad_request("invalid subscription id"))?;

    let status = params
        .status
        .as_deref()
        .and_then(SubscriptionStatus::parse)
        .ok_or_else(|| ApiError::bad_request("invalid subscription status"))?;

    app_state
        .subscription_service
        .update_subscription_status(subscription_id, status)
        .await?;

    Ok(Json(StatusMessageResponse::ok(
        "Successfully updated the subscription status",
    )))
}

pub fn create_subscriptions_router() -> Router<AppState> {
    Router::new()
        .route("/api/subscription/", post(create_subscription))
        .route(
            "/api/subscription/{subscription_id}",
            get(fetch_subscription).patch(update_subscription_status),
        )
}
