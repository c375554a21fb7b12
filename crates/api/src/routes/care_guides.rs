use axum::routing::get;
use axum::Router;

use crate::handlers::care_guides;
use crate::state::AppState;

/// Care guide routes mounted at `/care-guides`.
///
/// ```text
/// GET    /                  -> list_care_guides
/// GET    /{species}         -> get_care_guide
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(care_guides::list_care_guides))
        .route("/{species}", get(care_guides::get_care_guide))
}
