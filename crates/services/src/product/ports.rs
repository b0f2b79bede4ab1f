use async_trait::async_trait;

use crate::ProductId;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("product not found")]
    NotFound,
    #[error("invalid product id")]
    InvalidId,
}

/// A purchasable class offering with a fixed monthly price
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub monthly_price: f64,
    pub instructor_name: String,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch every product in the catalog
    async fn get_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Fetch a single product by id
    async fn get_by_id(&self, id: ProductId) -> Result<Product, ProductError>;
}

#[async_trait]
pub trait ProductService: Send + Sync {
    /// List the whole product catalog
    async fn fetch_all_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Fetch a single product by id
    async fn fetch_product(&self, id: ProductId) -> Result<Product, ProductError>;
}
