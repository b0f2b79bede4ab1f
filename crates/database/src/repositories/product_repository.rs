use crate::pool::DbPool;
use async_trait::async_trait;
use services::product::ports::{Product, ProductError, ProductRepository};
use services::ProductId;
use tokio_postgres::Row;

pub struct PostgresProductRepository {
    pool: DbPool,
}

impl PostgresProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn db_error(err: impl std::fmt::Display) -> ProductError {
    ProductError::DatabaseError(err.to_string())
}

fn row_to_product(row: &Row) -> Product {
    Product {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        monthly_price: row.get("monthly_price"),
        instructor_name: row.get("instructor_name"),
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        tracing::debug!("Repository: Fetching all products");

        let client = self.pool.get().await.map_err(db_error)?;

        let rows = client
            .query(
                "SELECT id, name, description, monthly_price, instructor_name
                 FROM product
                 ORDER BY name",
                &[],
            )
            .await
            .map_err(db_error)?;

        Ok(rows.iter().map(row_to_product).collect())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, ProductError> {
        tracing::debug!("Repository: Fetching product - product_id={}", id);

        let client = self.pool.get().await.map_err(db_error)?;

        let row = client
            .query_opt(
                "SELECT id, name, description, monthly_price, instructor_name
                 FROM product
                 WHERE id = $1",
                &[&id],
            )
            .await
            .map_err(db_error)?
            .ok_or(ProductError::NotFound)?;

        Ok(row_to_product(&row))
    }
}
