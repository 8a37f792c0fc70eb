#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use catalog_api::{
    config::AppConfig,
    db,
    repositories::{CategoryRepository, ProductRepository},
    AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Helper harness for spinning up an application state backed by an in-memory SQLite database.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        // A single pooled connection keeps every query on the same in-memory database.
        let mut cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "127.0.0.1".to_string(),
            18_000,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = catalog_api::app_router(state.clone());

        Self { router, state }
    }

    pub fn categories(&self) -> &CategoryRepository {
        &self.state.categories
    }

    pub fn products(&self) -> &ProductRepository {
        &self.state.products
    }

    /// Sends a request through the full router stack.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        self.request_with_headers(method, uri, body, &[]).await
    }

    pub async fn request_with_headers(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> Response {
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

    /// Sends a raw, possibly malformed, JSON body.
    pub async fn request_raw(&self, method: Method, uri: &str, raw: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_owned()))
            .expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Creates a category over HTTP and returns its JSON representation.
    pub async fn create_category(&self, name: &str) -> Value {
        let response = self
            .request(Method::POST, "/categories/", Some(json!({ "name": name })))
            .await;
        assert_eq!(response.status(), StatusCode::OK, "category create failed");
        json_body(response).await
    }

    /// Creates a product over HTTP and returns its JSON representation.
    pub async fn create_product(&self, body: Value) -> Value {
        let response = self.request(Method::POST, "/products/", Some(body)).await;
        assert_eq!(response.status(), StatusCode::OK, "product create failed");
        json_body(response).await
    }
}

/// Reads a response body as JSON.
pub async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not JSON")
}
