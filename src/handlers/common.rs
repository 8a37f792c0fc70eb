use crate::errors::ApiError;
use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt::Display;
use validator::Validate;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))
}

/// 404 for an entity id that does not exist, e.g. `Category 7 not found`
pub fn not_found(entity: &str, id: impl Display) -> ApiError {
    ApiError::NotFound(format!("{entity} {id} not found"))
}

/// Resolves the `:id` segment. Integers past the key range cannot name a row,
/// so they are reported as not found rather than as a malformed path.
pub fn entity_id(entity: &str, path: Result<Path<i64>, PathRejection>) -> Result<i32, ApiError> {
    let Path(raw) = path?;
    i32::try_from(raw).map_err(|_| not_found(entity, raw))
}
