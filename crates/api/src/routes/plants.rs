//! Route definitions for plants.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::plants;
use crate::state::AppState;

/// Plant routes mounted at `/plants`.
///
/// ```text
/// GET    /                  -> list_plants
/// POST   /                  -> create_plant
/// GET    /due               -> list_due_care
/// GET    /{id}              -> get_plant
/// PATCH  /{id}              -> update_plant
/// DELETE /{id}              -> delete_plant
/// POST   /{id}/water        -> water_plant
/// POST   /{id}/fertilize    -> fertilize_plant
/// GET    /{id}/care-status  -> get_care_status
/// GET    /{id}/care-guide   -> get_plant_care_guide
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plants::list_plants).post(plants::create_plant))
        .route("/due", get(plants::list_due_care))
        .route(
            "/{id}",
            get(plants::get_plant)
                .patch(plants::update_plant)
                .delete(plants::delete_plant),
        )
        .route("/{id}/water", post(plants::water_plant))
        .route("/{id}/fertilize", post(plants::fertilize_plant))
        .route("/{id}/care-status", get(plants::get_care_status))
        .route("/{id}/care-guide", get(plants::get_plant_care_guide))
}
