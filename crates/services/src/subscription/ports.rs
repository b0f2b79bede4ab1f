use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::product::ports::ProductError;
use crate::{ProductId, SubscriptionId};

#[derive(Debug, thiserror::Error)]
pub enum SubscriptionError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("subscription not found")]
    NotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("invalid subscription id")]
    InvalidId,
    #[error("invalid start date")]
    InvalidStartDate,
    #[error("invalid subscription duration")]
    InvalidDuration,
    #[error("cannot update cancelled subscription")]
    CancelledImmutable,
}

impl From<ProductError> for SubscriptionError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => SubscriptionError::ProductNotFound,
            ProductError::InvalidId => SubscriptionError::ProductNotFound,
            ProductError::DatabaseError(message) => SubscriptionError::DatabaseError(message),
        }
    }
}

/// Lifecycle status of a subscription.
///
/// `Cancelled` is terminal: once a subscription is cancelled its status can
/// never change again. Every other status may transition freely to any of
/// the four via explicit update calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum SubscriptionStatus {
    Inactive,
    Active,
    Paused,
    Cancelled,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Inactive => "inactive",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Paused => "paused",
            SubscriptionStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a wire literal into a status, `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "inactive" => Some(SubscriptionStatus::Inactive),
            "active" => Some(SubscriptionStatus::Active),
            "paused" => Some(SubscriptionStatus::Paused),
            "cancelled" => Some(SubscriptionStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubscriptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer's purchase of a product for a fixed number of months.
/// `product_id` is internal bookkeeping and never leaves the API.
#[derive(Debug, Clone)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub product_id: ProductId,
    pub duration_in_months: i16,
    pub tax: f64,
    pub total_cost: f64,
    pub status: SubscriptionStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// The mutable fields of a stored subscription. Only the status may change
/// after creation; cost, tax, and dates are fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionUpdate {
    pub status: SubscriptionStatus,
}

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Insert a new subscription record
    async fn create(&self, subscription: Subscription) -> Result<Subscription, SubscriptionError>;

    /// Fetch a subscription by id
    async fn get_by_id(&self, id: SubscriptionId) -> Result<Subscription, SubscriptionError>;

    /// Apply a partial update to an existing subscription.
    ///
    /// Returns `NotFound` when no stored row matches `id` (zero rows
    /// affected), so callers learn about concurrent deletions.
    async fn update(
        &self,
        id: SubscriptionId,
        update: SubscriptionUpdate,
    ) -> Result<(), SubscriptionError>;
}

#[async_trait]
pub trait SubscriptionService: Send + Sync {
    /// Create a subscription for a product, deriving the initial status from
    /// the start date and computing cost and tax
    async fn create_subscription(
        &self,
        product_id: ProductId,
        duration_in_months: i16,
        start_date: NaiveDate,
    ) -> Result<Subscription, SubscriptionError>;

    /// Fetch a subscription by id
    async fn fetch_subscription(&self, id: SubscriptionId)
        -> Result<Subscription, SubscriptionError>;

    /// Transition a subscription to a new status
    async fn update_subscription_status(
        &self,
        id: SubscriptionId,
        status: SubscriptionStatus,
    ) -> Result<(), SubscriptionError>;
}
