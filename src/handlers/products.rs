use crate::dto::{MessageResponse, ProductInput, ProductResponse};
use crate::handlers::common::{entity_id, not_found, success_response, validate_input};
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};

const ENTITY: &str = "Product";

/// Creates the router for product endpoints
pub fn products_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// List all products
#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "All products", body = [ProductResponse])
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let products = state.products.list().await?;

    Ok(success_response(
        products
            .into_iter()
            .map(ProductResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product retrieved", body = ProductResponse),
        (status = 400, description = "Id is not an integer", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = entity_id(ENTITY, path)?;
    let product = state
        .products
        .get(id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products/",
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 422, description = "Malformed body or missing price", body = crate::errors::ErrorResponse),
        (status = 500, description = "Storage failure, e.g. unknown category", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    validate_input(&payload)?;

    let product = state
        .products
        .create(payload)
        .await?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ProductResponse),
        (status = 400, description = "Invalid payload or id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = entity_id(ENTITY, path)?;
    let Json(payload) = payload?;
    validate_input(&payload)?;

    let product = state
        .products
        .update(id, payload)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    Ok(success_response(ProductResponse::from(product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = entity_id(ENTITY, path)?;
    state
        .products
        .delete(id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    Ok(success_response(MessageResponse::new(
        "Product deleted successfully",
    )))
}
