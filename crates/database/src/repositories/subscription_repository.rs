use crate::pool::DbPool;
use async_trait::async_trait;
use services::subscription::ports::{
    Subscription, SubscriptionError, SubscriptionRepository, SubscriptionStatus,
    SubscriptionUpdate,
};
use services::SubscriptionId;
use tokio_postgres::Row;

pub struct PostgresSubscriptionRepository {
    pool: DbPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn db_error(err: impl std::fmt::Display) -> SubscriptionError {
    SubscriptionError::DatabaseError(err.to_string())
}

fn row_to_subscription(row: &Row) -> Result<Subscription, SubscriptionError> {
    let status: String = row.get("status");
    let status = SubscriptionStatus::parse(&status).ok_or_else(|| {
        SubscriptionError::DatabaseError(format!("unknown subscription status: {status}"))
    })?;

    Ok(Subscription {
        id: row.get("id"),
        product_id: row.get("product_id"),
        duration_in_months: row.get("duration_in_months"),
        tax: row.get("tax"),
        total_cost: row.get("total_cost"),
        status,
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
    })
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn create(&self, subscription: Subscription) -> Result<Subscription, SubscriptionError> {
        tracing::info!(
            "Repository: Creating subscription - subscription_id={}, product_id={}",
            subscription.id,
            subscription.product_id
        );

        let client = self.pool.get().await.map_err(db_error)?;

        let status = subscription.status.as_str();
        let row = client
            .query_one(
                "INSERT INTO subscription (
                    id, product_id, duration_in_months, tax, total_cost,
                    status, start_date, end_date
                 )
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                 RETURNING id, product_id, duration_in_months, tax, total_cost,
                           status, start_date, end_date",
                &[
                    &subscription.id,
                    &subscription.product_id,
                    &subscription.duration_in_months,
                    &subscription.tax,
                    &subscription.total_cost,
                    &status,
                    &subscription.start_date,
                    &subscription.end_date,
                ],
            )
            .await
            .map_err(db_error)?;

        row_to_subscription(&row)
    }

    async fn get_by_id(&self, id: SubscriptionId) -> Result<Subscription, SubscriptionError> {
        tracing::debug!("Repository: Fetching subscription - subscription_id={}", id);

        let client = self.pool.get().await.map_err(db_error)?;

        let row = client
            .query_opt(
                "SELECT id, product_id, duration_in_months, tax, total_cost,
                        status, start_date, end_date
                 FROM subscription
                 WHERE id = $1",
                &[&id],
            )
            .await
            .map_err(db_error)?
            .ok_or(SubscriptionError::NotFound)?;

        row_to_subscription(&row)
    }

    async fn update(
        &self,
        id: SubscriptionId,
        update: SubscriptionUpdate,
    ) -> Result<(), SubscriptionError> {
        tracing::info!(
            "Repository: Updating subscription - subscription_id={}, status={}",
            id,
            update.status
        );

        let client = self.pool.get().await.map_err(db_error)?;

        let status = update.status.as_str();
        let rows_affected = client
            .execute(
                "UPDATE subscription SET status = $2 WHERE id = $1",
                &[&id, &status],
            )
            .await
            .map_err(db_error)?;

        // Zero rows means the record vanished between lookup and update
        if rows_affected == 0 {
            return Err(SubscriptionError::NotFound);
        }

        Ok(())
    }
}
