//! Handlers for the read-only care guide catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use greencare_core::error::CoreError;
use greencare_db::repositories::CareGuideRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/care-guides
pub async fn list_care_guides(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let guides = CareGuideRepo::list(&state.pool).await;

    Ok(Json(DataResponse { data: guides }))
}

/// GET /api/care-guides/{species}
///
/// Exact, case-sensitive match on the species name.
pub async fn get_care_guide(
    State(state): State<AppState>,
    Path(species): Path<String>,
) -> AppResult<impl IntoResponse> {
    let guide = CareGuideRepo::find_by_species(&state.pool, &species)
        .await
        .ok_or(AppError::Core(CoreError::NotFoundByName {
            entity: "CareGuide",
            name: species,
        }))?;

    Ok(Json(DataResponse { data: guide }))
}
