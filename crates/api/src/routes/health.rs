use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
///
/// Always answers 200; a failed `SELECT 1` only flips `status` to
/// `degraded` so load balancers can tell "process up" from "DB down".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = survey_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
///
/// No auth extractor runs here.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
