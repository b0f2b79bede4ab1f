use serde::{Deserialize, Serialize};
use services::consts::DATE_FORMAT;
use services::product::ports::Product;
use services::subscription::ports::{Subscription, SubscriptionStatus};
use services::{ProductId, SubscriptionId};
use utoipa::ToSchema;

/// Request to create a new subscription
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSubscriptionRequest {
    /// Product to subscribe to (UUID)
    pub product_id: String,
    /// First covered day, formatted DD-MM-YYYY
    pub start_date: String,
    /// Length of the subscription in months
    pub duration_in_months: i16,
}

/// Product response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub monthly_price: f64,
    pub instructor_name: String,
}

/// Subscription response DTO. The backing product is internal bookkeeping
/// and deliberately not exposed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionResponse {
    pub id: SubscriptionId,
    pub duration_in_months: i16,
    pub tax: f64,
    pub total_cost: f64,
    pub status: SubscriptionStatus,
    /// First covered day, formatted DD-MM-YYYY
    pub start_date: String,
    /// Last covered day, formatted DD-MM-YYYY
    pub end_date: String,
}

/// Body for endpoints that only confirm an action
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusMessageResponse {
    pub status_code: u16,
    pub message: String,
}

impl StatusMessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            message: message.into(),
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            monthly_price: product.monthly_price,
            instructor_name: product.instructor_name,
        }
    }
}

impl From<Subscription> for SubscriptionResponse {
    fn from(subscription: Subscription) -> Self {
        Self {
            id: subscription.id,
            duration_in_months: subscription.duration_in_months,
            tax: subscription.tax,
            total_cost: subscription.total_cost,
            status: subscription.status,
            start_date: subscription.start_date.format(DATE_FORMAT).to_string(),
            end_date: subscription.end_date.format(DATE_FORMAT).to_string(),
        }
    }
}
