//! Handlers for plant CRUD, care actions and the due-care dashboard.
//!
//! Due status is computed from the stored care clocks at request time; no
//! handler writes it back.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use greencare_core::care_schedule::CareKind;
use greencare_core::error::CoreError;
use greencare_db::models::plant::{CreatePlant, DueCareItem, PlantCareStatus, UpdatePlant};
use greencare_db::repositories::{CareGuideRepo, PlantRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::extract::{PlantId, ValidatedJson};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/plants
pub async fn list_plants(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let plants = PlantRepo::list(&state.pool).await;

    Ok(Json(DataResponse { data: plants }))
}

/// GET /api/plants/{id}
pub async fn get_plant(
    State(state): State<AppState>,
    PlantId(plant_id): PlantId,
) -> AppResult<impl IntoResponse> {
    let plant = PlantRepo::find_by_id(&state.pool, plant_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id: plant_id,
        }))?;

    Ok(Json(DataResponse { data: plant }))
}

/// POST /api/plants
///
/// Create a plant. The store assigns the id and starts the care clocks.
pub async fn create_plant(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePlant>,
) -> AppResult<impl IntoResponse> {
    let plant = PlantRepo::create(&state.pool, &input).await;

    tracing::info!(
        plant_id = plant.id,
        name = %plant.name,
        species = %plant.species,
        water_frequency = plant.water_frequency,
        fertilize_frequency = ?plant.fertilize_frequency,
        "Plant created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: plant })))
}

/// PATCH /api/plants/{id}
///
/// Partially update a plant. Absent fields are left untouched.
pub async fn update_plant(
    State(state): State<AppState>,
    PlantId(plant_id): PlantId,
    ValidatedJson(input): ValidatedJson<UpdatePlant>,
) -> AppResult<impl IntoResponse> {
    let plant = PlantRepo::update(&state.pool, plant_id, &input)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id: plant_id,
        }))?;

    tracing::info!(plant_id, "Plant updated");

    Ok(Json(DataResponse { data: plant }))
}

/// DELETE /api/plants/{id}
pub async fn delete_plant(
    State(state): State<AppState>,
    PlantId(plant_id): PlantId,
) -> AppResult<impl IntoResponse> {
    let deleted = PlantRepo::delete(&state.pool, plant_id).await;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id: plant_id,
        }));
    }

    tracing::info!(plant_id, "Plant deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Care actions
// ---------------------------------------------------------------------------

/// POST /api/plants/{id}/water
///
/// Record a watering now, restarting the watering countdown.
pub async fn water_plant(
    State(state): State<AppState>,
    PlantId(plant_id): PlantId,
) -> AppResult<impl IntoResponse> {
    let plant = PlantRepo::update(&state.pool, plant_id, &UpdatePlant::watered_at(Utc::now()))
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id: plant_id,
        }))?;

    tracing::info!(plant_id, kind = CareKind::Watering.as_str(), "Care recorded");

    Ok(Json(DataResponse { data: plant }))
}

/// POST /api/plants/{id}/fertilize
///
/// Record a fertilizing now. Rejected for plants without a fertilizing
/// cadence.
pub async fn fertilize_plant(
    State(state): State<AppState>,
    PlantId(plant_id): PlantId,
) -> AppResult<impl IntoResponse> {
    let plant = PlantRepo::find_by_id(&state.pool, plant_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id: plant_id,
        }))?;

    if plant.fertilize_frequency.is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Plant {plant_id} has no fertilizing schedule"
        ))));
    }

    let plant = PlantRepo::update(&state.pool, plant_id, &UpdatePlant::fertilized_at(Utc::now()))
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id: plant_id,
        }))?;

    tracing::info!(plant_id, kind = CareKind::Fertilizing.as_str(), "Care recorded");

    Ok(Json(DataResponse { data: plant }))
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// GET /api/plants/{id}/care-status
pub async fn get_care_status(
    State(state): State<AppState>,
    PlantId(plant_id): PlantId,
) -> AppResult<impl IntoResponse> {
    let plant = PlantRepo::find_by_id(&state.pool, plant_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id: plant_id,
        }))?;

    Ok(Json(DataResponse {
        data: PlantCareStatus::of(&plant, Utc::now()),
    }))
}

/// GET /api/plants/due
///
/// Every care action due right now, ordered by plant id with watering
/// before fertilizing.
pub async fn list_due_care(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let now = Utc::now();
    let items: Vec<DueCareItem> = PlantRepo::list(&state.pool)
        .await
        .iter()
        .flat_map(|plant| plant.due_items(now))
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/plants/{id}/care-guide
///
/// The care guide whose species exactly matches the plant's.
pub async fn get_plant_care_guide(
    State(state): State<AppState>,
    PlantId(plant_id): PlantId,
) -> AppResult<impl IntoResponse> {
    let plant = PlantRepo::find_by_id(&state.pool, plant_id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plant",
            id: plant_id,
        }))?;

    let guide = CareGuideRepo::find_by_species(&state.pool, &plant.species)
        .await
        .ok_or(AppError::Core(CoreError::NotFoundByName {
            entity: "CareGuide",
            name: plant.species,
        }))?;

    Ok(Json(DataResponse { data: guide }))
}
