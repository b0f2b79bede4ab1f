use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use services::product::ports::ProductError;
use services::subscription::ports::SubscriptionError;
use utoipa::ToSchema;

/// Structured error response returned to API consumers
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ApiErrorResponse {
    /// HTTP status code, repeated in the body for client convenience
    pub status_code: u16,
    /// Human-readable error message
    pub error: String,
}

/// Convenient wrapper type for API errors that combines status code with error response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                status_code: status.as_u16(),
                error: error.into(),
            },
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Implement IntoResponse so ApiError can be returned directly from handlers
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::NotFound => Self::not_found(message),
            ProductError::InvalidId => Self::bad_request(message),
            ProductError::DatabaseError(detail) => {
                tracing::error!("Database error serving products: {}", detail);
                Self::internal_server_error("Failed to query products")
            }
        }
    }
}

impl From<SubscriptionError> for ApiError {
    fn from(err: SubscriptionError) -> Self {
        let message = err.to_string();
        match err {
            SubscriptionError::NotFound | SubscriptionError::ProductNotFound => {
                Self::not_found(message)
            }
            SubscriptionError::InvalidId
            | SubscriptionError::InvalidStartDate
            | SubscriptionError::InvalidDuration
            | SubscriptionError::CancelledImmutable => Self::bad_request(message),
            SubscriptionError::DatabaseError(detail) => {
                tracing::error!("Database error serving subscriptions: {}", detail);
                Self::internal_server_error("Failed to query subscriptions")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_error() {
        let err = ApiError::bad_request("Invalid input");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.status_code, 400);
        assert_eq!(err.response.error, "Invalid input");
    }

    #[test]
    fn test_product_error_mapping() {
        let err = ApiError::from(ProductError::NotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.response.error, "product not found");

        let err = ApiError::from(ProductError::InvalidId);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_subscription_error_mapping() {
        let err = ApiError::from(SubscriptionError::ProductNotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = ApiError::from(SubscriptionError::InvalidStartDate);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = ApiError::from(SubscriptionError::CancelledImmutable);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error, "cannot update cancelled subscription");
    }

    #[test]
    fn test_database_error_is_opaque() {
        let err = ApiError::from(SubscriptionError::DatabaseError(
            "connection refused".to_string(),
        ));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.response.error.contains("connection refused"));
    }
}
