use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub plant_count: usize,
    pub care_guide_count: usize,
}

/// GET /health -- returns service status and store row counts.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = greencare_db::stats(&state.pool).await;

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        plant_count: stats.plant_count,
        care_guide_count: stats.care_guide_count,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
