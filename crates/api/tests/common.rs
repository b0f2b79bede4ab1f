#![allow(dead_code)]

use api::{create_router, AppState};
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use services::product::ports::{Product, ProductError, ProductRepository};
use services::product::service::ProductServiceImpl;
use services::subscription::ports::{
    Subscription, SubscriptionError, SubscriptionRepository, SubscriptionStatus,
    SubscriptionUpdate,
};
use services::subscription::service::SubscriptionServiceImpl;
use services::{ProductId, SubscriptionId};
use std::sync::{Arc, Mutex};

/// Product store backed by a plain Vec, no database required
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn insert(&self, product: Product) {
        self.products.lock().expect("lock products").push(product);
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.products.lock().expect("lock products").clone())
    }

    async fn get_by_id(&self, id: ProductId) -> Result<Product, ProductError> {
        self.products
            .lock()
            .expect("lock products")
            .iter()
            .find(|product| product.id == id)
            .cloned()
            .ok_or(ProductError::NotFound)
    }
}

/// Subscription store backed by a plain Vec, no database required
#[derive(Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn insert(&self, subscription: Subscription) {
        self.subscriptions
            .lock()
            .expect("lock subscriptions")
            .push(subscription);
    }

    pub fn stored(&self, id: SubscriptionId) -> Option<Subscription> {
        self.subscriptions
            .lock()
            .expect("lock subscriptions")
            .iter()
            .find(|subscription| subscription.id == id)
            .cloned()
    }

    pub fn all(&self) -> Vec<Subscription> {
        self.subscriptions
            .lock()
            .expect("lock subscriptions")
            .clone()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn create(&self, subscription: Subscription) -> Result<Subscription, SubscriptionError> {
        self.insert(subscription.clone());
        Ok(subscription)
    }

    async fn get_by_id(&self, id: SubscriptionId) -> Result<Subscription, SubscriptionError> {
        self.stored(id).ok_or(SubscriptionError::NotFound)
    }

    async fn update(
        &self,
        id: SubscriptionId,
        update: SubscriptionUpdate,
    ) -> Result<(), SubscriptionError> {
        let mut subscriptions = self.subscriptions.lock().expect("lock subscriptions");
        let subscription = subscriptions
            .iter_mut()
            .find(|subscription| subscription.id == id)
            .ok_or(SubscriptionError::NotFound)?;
        subscription.status = update.status;
        Ok(())
    }
}

/// Handles to the in-memory stores behind a running test server
pub struct TestApp {
    pub server: TestServer,
    pub products: Arc<InMemoryProductRepository>,
    pub subscriptions: Arc<InMemorySubscriptionRepository>,
}

/// Create a test server over the real router wired to in-memory stores
pub fn create_test_server() -> TestApp {
    let products = Arc::new(InMemoryProductRepository::default());
    let subscriptions = Arc::new(InMemorySubscriptionRepository::default());

    let product_service = Arc::new(ProductServiceImpl::new(
        products.clone() as Arc<dyn ProductRepository>
    ));
    let subscription_service = Arc::new(SubscriptionServiceImpl::new(
        subscriptions.clone() as Arc<dyn SubscriptionRepository>,
        products.clone() as Arc<dyn ProductRepository>,
    ));

    let app_state = AppState {
        product_service: product_service as Arc<dyn services::product::ports::ProductService>,
        subscription_service: subscription_service
            as Arc<dyn services::subscription::ports::SubscriptionService>,
    };

    let server = TestServer::new(create_router(app_state)).expect("start test server");

    TestApp {
        server,
        products,
        subscriptions,
    }
}

/// Insert a product into the catalog and return it
pub fn seed_product(app: &TestApp, name: &str, monthly_price: f64) -> Product {
    let product = Product {
        id: ProductId::new(),
        name: name.to_string(),
        description: format!("{name} classes"),
        monthly_price,
        instructor_name: "Alex Morgan".to_string(),
    };
    app.products.insert(product.clone());
    product
}

/// Insert a subscription directly into the store and return it
pub fn seed_subscription(app: &TestApp, status: SubscriptionStatus) -> Subscription {
    let subscription = Subscription {
        id: SubscriptionId::new(),
        product_id: ProductId::new(),
        duration_in_months: 3,
        tax: 1.05,
        total_cost: 16.05,
        status,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        end_date: NaiveDate::from_ymd_opt(2024, 4, 15).expect("valid date"),
    };
    app.subscriptions.insert(subscription.clone());
    subscription
}

/// Today's date rendered in the wire format (DD-MM-YYYY)
pub fn today_wire() -> String {
    chrono::Utc::now()
        .date_naive()
        .format(services::consts::DATE_FORMAT)
        .to_string()
}

/// A date `days` ahead of today rendered in the wire format
pub fn days_from_today_wire(days: i64) -> String {
    (chrono::Utc::now().date_naive() + chrono::Duration::days(days))
        .format(services::consts::DATE_FORMAT)
        .to_string()
}
