pub mod consts;
pub mod product;
pub mod subscription;
pub mod types;

pub use types::{ProductId, SubscriptionId};
