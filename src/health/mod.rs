/*!
 * # Health Check Module
 *
 * - Liveness message (`/`) - the process is serving requests
 * - Health check (`/health`) - the database answers a ping
 */

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::dto::MessageResponse;
use crate::AppState;

/// Basic health status
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Up,
    Down,
}

/// Overall health information
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct HealthInfo {
    pub status: HealthStatus,
    pub database: HealthStatus,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = MessageResponse)),
    tag = "Health"
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Catalog API is running"))
}

/// Database-backed health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable", body = HealthInfo),
        (status = 503, description = "Database unreachable", body = HealthInfo)
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match crate::db::check_connection(&state.db).await {
        Ok(()) => HealthStatus::Up,
        Err(e) => {
            error!("Database health check failed: {}", e);
            HealthStatus::Down
        }
    };

    let info = HealthInfo {
        status: database,
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    };

    let code = match database {
        HealthStatus::Up => StatusCode::OK,
        HealthStatus::Down => StatusCode::SERVICE_UNAVAILABLE,
    };

    (code, Json(info))
}
