use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use greencare_core::error::CoreError;
use greencare_db::repositories::PlantTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// GET /api/plant-templates
pub async fn list_plant_templates() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: PlantTemplateRepo::list(),
    }))
}

/// GET /api/plant-templates/{species}
pub async fn get_plant_template(Path(species): Path<String>) -> AppResult<impl IntoResponse> {
    let template = PlantTemplateRepo::find_by_species(&species).ok_or(AppError::Core(
        CoreError::NotFoundByName {
            entity: "PlantTemplate",
            name: species,
        },
    ))?;

    Ok(Json(DataResponse { data: template }))
}
