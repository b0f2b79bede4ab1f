use async_trait::async_trait;
use chrono::{Months, NaiveDate, Utc};
use std::sync::Arc;

use super::ports::{
    Subscription, SubscriptionError, SubscriptionRepository, SubscriptionService,
    SubscriptionStatus, SubscriptionUpdate,
};
use crate::consts::{MAX_DURATION_MONTHS, MIN_DURATION_MONTHS, TAX_PERCENT};
use crate::product::ports::ProductRepository;
use crate::{ProductId, SubscriptionId};

pub struct SubscriptionServiceImpl {
    subscription_repository: Arc<dyn SubscriptionRepository>,
    product_repository: Arc<dyn ProductRepository>,
}

impl SubscriptionServiceImpl {
    pub fn new(
        subscription_repository: Arc<dyn SubscriptionRepository>,
        product_repository: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            subscription_repository,
            product_repository,
        }
    }
}

/// Derive the status a subscription is born with from its start date.
///
/// Starting today means the subscription is live immediately; starting in
/// the past is rejected outright. Anything else (tomorrow or later) begins
/// dormant and waits for its start date.
fn derive_initial_status(
    start_date: NaiveDate,
    today: NaiveDate,
) -> Result<SubscriptionStatus, SubscriptionError> {
    if start_date == today {
        Ok(SubscriptionStatus::Active)
    } else if start_date < today {
        Err(SubscriptionError::InvalidStartDate)
    } else {
        Ok(SubscriptionStatus::Inactive)
    }
}

/// Last day covered by a subscription: `start_date` plus the duration in
/// calendar months. Chrono clamps to the end of the month when the target
/// month is shorter (Jan 31 + 1 month = Feb 28).
fn subscription_end_date(
    start_date: NaiveDate,
    duration_in_months: i16,
) -> Result<NaiveDate, SubscriptionError> {
    start_date
        .checked_add_months(Months::new(duration_in_months as u32))
        .ok_or(SubscriptionError::InvalidStartDate)
}

#[async_trait]
impl SubscriptionService for SubscriptionServiceImpl {
    async fn create_subscription(
        &self,
        product_id: ProductId,
        duration_in_months: i16,
        start_date: NaiveDate,
    ) -> Result<Subscription, SubscriptionError> {
        tracing::info!(
            "Creating subscription: product_id={}, duration={} month(s), start_date={}",
            product_id,
            duration_in_months,
            start_date
        );

        let today = Utc::now().date_naive();
        let status = derive_initial_status(start_date, today)?;

        if !(MIN_DURATION_MONTHS..=MAX_DURATION_MONTHS).contains(&duration_in_months) {
            return Err(SubscriptionError::InvalidDuration);
        }

        let product = self.product_repository.get_by_id(product_id).await?;

        let cost_before_tax = product.monthly_price * f64::from(duration_in_months);
        let tax = cost_before_tax * (TAX_PERCENT / 100.0);
        let total_cost = cost_before_tax + tax;

        let subscription = Subscription {
            id: SubscriptionId::new(),
            product_id,
            duration_in_months,
            tax,
            total_cost,
            status,
            start_date,
            end_date: subscription_end_date(start_date, duration_in_months)?,
        };

        let created = self.subscription_repository.create(subscription).await?;

        tracing::info!(
            "Created subscription: subscription_id={}, status={}",
            created.id,
            created.status
        );

        Ok(created)
    }

    async fn fetch_subscription(
        &self,
        id: SubscriptionId,
    ) -> Result<Subscription, SubscriptionError> {
        tracing::debug!("Fetching subscription: subscription_id={}", id);

        if id.is_nil() {
            return Err(SubscriptionError::InvalidId);
        }

        self.subscription_repository.get_by_id(id).await
    }

    async fn update_subscription_status(
        &self,
        id: SubscriptionId,
        status: SubscriptionStatus,
    ) -> Result<(), SubscriptionError> {
        tracing::info!(
            "Updating subscription status: subscription_id={}, status={}",
            id,
            status
        );

        if id.is_nil() {
            return Err(SubscriptionError::InvalidId);
        }

        let current = self.subscription_repository.get_by_id(id).await?;

        // Cancelled is terminal; reject before touching the store.
        if current.status == SubscriptionStatus::Cancelled {
            return Err(SubscriptionError::CancelledImmutable);
        }

        self.subscription_repository
            .update(id, SubscriptionUpdate { status })
            .await
    }
}
