pub mod ports;
pub mod service;

// Re-export commonly used types
pub use ports::{
    Subscription, SubscriptionError, SubscriptionRepository, SubscriptionService,
    SubscriptionStatus, SubscriptionUpdate,
};
pub use service::SubscriptionServiceImpl;
