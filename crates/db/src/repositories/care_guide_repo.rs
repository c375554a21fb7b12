//! Repository for the care guide catalog.

use crate::models::care_guide::{CareGuide, CreateCareGuide};
use crate::MemoryDb;

/// Provides read access to care guides, plus the insert used by seeding.
pub struct CareGuideRepo;

impl CareGuideRepo {
    /// List all care guides in seed order.
    pub async fn list(pool: &MemoryDb) -> Vec<CareGuide> {
        pool.care_guides.read().await.rows.values().cloned().collect()
    }

    /// Find the guide for `species`. Matching is exact and case-sensitive.
    pub async fn find_by_species(pool: &MemoryDb, species: &str) -> Option<CareGuide> {
        pool.care_guides.read().await.rows.get(species).cloned()
    }

    /// Add a guide to the catalog. A guide for an already-known species
    /// replaces the old one in place.
    pub async fn create(pool: &MemoryDb, input: &CreateCareGuide) -> CareGuide {
        let mut table = pool.care_guides.write().await;
        let guide = CareGuide {
            id: table.allocate_id(),
            species: input.species.clone(),
            watering_guide: input.watering_guide.clone(),
            sunlight_guide: input.sunlight_guide.clone(),
            fertilizing_guide: input.fertilizing_guide.clone(),
            common_issues: input.common_issues.clone(),
        };
        table.rows.insert(guide.species.clone(), guide.clone());
        guide
    }
}
