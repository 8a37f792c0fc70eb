//! Catalog API Library
//!
//! Category and product CRUD over HTTP, backed by SeaORM.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod repositories;
pub mod tracing;

use axum::{
    http::{header::HeaderName, HeaderValue},
    Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::config::AppConfig;
use crate::repositories::{CategoryRepository, ProductRepository};

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: AppConfig,
    pub categories: CategoryRepository,
    pub products: ProductRepository,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: AppConfig) -> Self {
        Self {
            categories: CategoryRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            db,
            config,
        }
    }
}

/// Cross-origin policy for the configured frontend origins.
///
/// Methods and headers are mirrored from the preflight request because
/// wildcards cannot be combined with credentials.
pub fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cfg.cors_origins();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cfg.cors_allow_credentials)
        .expose_headers([HeaderName::from_static(
            middleware_helpers::REQUEST_ID_HEADER,
        )])
}

/// Full application router: liveness/health, catalog CRUD, Swagger UI and
/// the tracing, CORS and request-id layers.
pub fn app_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::<AppState>::new()
        .merge(health::health_routes())
        .merge(handlers::catalog_routes())
        .merge(openapi::swagger_ui())
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        .layer(cors)
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}
