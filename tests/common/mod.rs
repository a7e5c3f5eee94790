#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use petmall_catalog::{
    config::AppConfig,
    db,
    entities::commerce::{product, store, user},
    AppState,
};
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tower::ServiceExt;

/// Helper harness for spinning up an application state backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        // Every pooled connection to `sqlite::memory:` is its own database.
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(std::sync::Arc::new(pool), cfg);
        let router = petmall_catalog::app_router(state.clone());

        Self { router, state }
    }

    /// Send a request against the router.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        self.request_with_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    pub async fn seed_store(&self, name: &str) -> store::Model {
        store::ActiveModel {
            store_name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("failed to seed store")
    }

    pub async fn seed_user(&self, nickname: &str) -> user::Model {
        user::ActiveModel {
            email: Set(format!("{nickname}@petmall.test")),
            nickname: Set(nickname.to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("failed to seed user")
    }

    pub async fn seed_product(&self, seed: ProductSeed) -> product::Model {
        product::ActiveModel {
            store_id: Set(seed.store_id),
            image_url: Set(None),
            animal_category: Set(seed.animal_category),
            product_category: Set(seed.product_category),
            product_name: Set(seed.name),
            model_num: Set(None),
            origin_label: Set(None),
            price: Set(seed.price),
            description: Set(seed.description),
            stock: Set(seed.stock),
            wish_count: Set(seed.wish_count),
            purchase_count: Set(seed.purchase_count),
            created_at: Set(seed.created_at),
            ..Default::default()
        }
        .insert(&*self.state.db)
        .await
        .expect("failed to seed product")
    }
}

/// Product row with test defaults; override fields with struct update syntax.
#[derive(Debug, Clone)]
pub struct ProductSeed {
    pub animal_category: i32,
    pub product_category: i32,
    pub name: String,
    pub description: Option<String>,
    pub store_id: Option<i64>,
    pub price: i64,
    pub stock: i32,
    pub wish_count: i32,
    pub purchase_count: i32,
    pub created_at: DateTime<Utc>,
}

impl ProductSeed {
    pub fn new(animal_category: i32, product_category: i32, name: &str) -> Self {
        Self {
            animal_category,
            product_category,
            name: name.to_string(),
            description: None,
            store_id: None,
            price: 10_000,
            stock: 10,
            wish_count: 0,
            purchase_count: 0,
            created_at: Utc::now() - Duration::days(1),
        }
    }
}

/// Read a JSON body from a response.
pub async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}
