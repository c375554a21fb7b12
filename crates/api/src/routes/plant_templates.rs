use axum::routing::get;
use axum::Router;

use crate::handlers::plant_templates;
use crate::state::AppState;

/// Plant template routes mounted at `/plant-templates`.
///
/// ```text
/// GET    /                  -> list_plant_templates
/// GET    /{species}         -> get_plant_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plant_templates::list_plant_templates))
        .route("/{species}", get(plant_templates::get_plant_template))
}
