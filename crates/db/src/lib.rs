//! In-memory plant store, entity models and repositories.
//!
//! Data lives for the lifetime of the process. Every caller receives an
//! explicit [`DbPool`] handle; there is no global instance, so each test can
//! build a fresh store.

pub mod models;
pub mod repositories;
pub mod seed;
mod store;

use std::sync::Arc;

pub use store::MemoryDb;

/// Shared handle to the store. Cheap to clone.
pub type DbPool = Arc<MemoryDb>;

/// Row counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub plant_count: usize,
    pub care_guide_count: usize,
}

/// Create a store with the care guide catalog already seeded.
pub async fn create_pool() -> DbPool {
    let pool = create_empty_pool();
    let seeded = seed::seed_care_guides(&pool).await;
    tracing::debug!(care_guides = seeded, "Care guide catalog seeded");
    pool
}

/// Create a store with no plants and no care guides.
pub fn create_empty_pool() -> DbPool {
    Arc::new(MemoryDb::default())
}

/// Current row counts.
pub async fn stats(pool: &MemoryDb) -> StoreStats {
    StoreStats {
        plant_count: pool.plants.read().await.rows.len(),
        care_guide_count: pool.care_guides.read().await.rows.len(),
    }
}
