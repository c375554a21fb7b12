use greencare_db::DbPool;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// In-memory plant and care guide store.
    pub pool: DbPool,
}
