pub mod care_guides;
pub mod health;
pub mod plant_templates;
pub mod plants;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /plants                          list, create
/// /plants/due                      due-care dashboard
/// /plants/{id}                     get, update (PATCH), delete
/// /plants/{id}/water               mark watered (POST)
/// /plants/{id}/fertilize           mark fertilized (POST)
/// /plants/{id}/care-status         scheduler output (GET)
/// /plants/{id}/care-guide          guide for the plant's species (GET)
///
/// /care-guides                     list
/// /care-guides/{species}           get
///
/// /plant-templates                 list
/// /plant-templates/{species}       get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/plants", plants::router())
        .nest("/care-guides", care_guides::router())
        .nest("/plant-templates", plant_templates::router())
}
