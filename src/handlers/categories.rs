use crate::dto::{CategoryInput, CategoryResponse, MessageResponse};
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

const ENTITY: &str = "Category";

/// Creates the router for category endpoints
pub fn categories_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories/",
    responses(
        (status = 200, description = "All categories", body = [CategoryResponse])
    ),
    tag = "Categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.categories.list().await?;

    Ok(success_response(
        categories
            .into_iter()
            .map(CategoryResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category retrieved", body = CategoryResponse),
        (status = 400, description = "Id is not an integer", body = crate::errors::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = entity_id(ENTITY, path)?;
    let category = state
        .categories
        .get(id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    Ok(success_response(CategoryResponse::from(category)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories/",
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 422, description = "Malformed body", body = crate::errors::ErrorResponse),
        (status = 500, description = "Storage failure, e.g. duplicate name", body = crate::errors::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    validate_input(&payload)?;

    let category = state
        .categories
        .create(payload)
        .await?;

    Ok(success_response(CategoryResponse::from(category)))
}

/// Replace a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Invalid payload or id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = entity_id(ENTITY, path)?;
    let Json(payload) = payload?;
    validate_input(&payload)?;

    let category = state
        .categories
        .update(id, payload)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    Ok(success_response(CategoryResponse::from(category)))
}

/// Delete a category and every product in it
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = crate::errors::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::errors::ErrorResponse)
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = entity_id(ENTITY, path)?;
    state
        .categories
        .delete(id)
        .await?
        .ok_or_else(|| not_found(ENTITY, id))?;

    Ok(success_response(MessageResponse::new(
        "Category deleted successfully",
    )))
}
