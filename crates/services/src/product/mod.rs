pub mod ports;
pub mod service;

// Re-export commonly used types
pub use ports::{Product, ProductError, ProductRepository, ProductService};
pub use service::ProductServiceImpl;
