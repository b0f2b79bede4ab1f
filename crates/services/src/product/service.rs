use async_trait::async_trait;
use std::sync::Arc;

use super::ports::{Product, ProductError, ProductRepository, ProductService};
use crate::ProductId;

pub struct ProductServiceImpl {
    repository: Arc<dyn ProductRepository>,
}

impl ProductServiceImpl {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductService for ProductServiceImpl {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, ProductError> {
        tracing::debug!("Fetching all products");

        let products = self.repository.get_all().await?;

        tracing::debug!("Retrieved {} product(s)", products.len());

        Ok(products)
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, ProductError> {
        tracing::debug!("Fetching product: product_id={}", id);

        if id.is_nil() {
            return Err(ProductError::InvalidId);
        }

        self.repository.get_by_id(id).await
    }
}
