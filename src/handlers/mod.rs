pub mod categories;
pub mod common;
pub mod products;

use crate::AppState;
use axum::Router;

/// Catalog CRUD routes for both entities
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::categories_routes())
        .merge(products::products_routes())
}
