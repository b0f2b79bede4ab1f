pub mod product_repository;
pub mod subscription_repository;

pub use product_repository::PostgresProductRepository;
pub use subscription_repository::PostgresSubscriptionRepository;
