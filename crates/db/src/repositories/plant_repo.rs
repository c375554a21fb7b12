//! Repository for the plant table.
//!
//! The store assigns ids and the care clocks; callers only supply the
//! user-editable fields.

use chrono::Utc;
use greencare_core::types::DbId;

use crate::models::plant::{CreatePlant, Plant, UpdatePlant};
use crate::MemoryDb;

/// Provides CRUD operations for plants.
pub struct PlantRepo;

impl PlantRepo {
    /// List all plants in creation order.
    pub async fn list(pool: &MemoryDb) -> Vec<Plant> {
        pool.plants.read().await.rows.values().cloned().collect()
    }

    /// Find a plant by its ID.
    pub async fn find_by_id(pool: &MemoryDb, id: DbId) -> Option<Plant> {
        pool.plants.read().await.rows.get(&id).cloned()
    }

    /// Insert a new plant, returning the created row.
    ///
    /// Ids increase monotonically from 1 and are never reused, even after a
    /// delete.
    pub async fn create(pool: &MemoryDb, input: &CreatePlant) -> Plant {
        let mut table = pool.plants.write().await;
        let id = table.allocate_id();
        let plant = Plant::from_create(id, input, Utc::now());
        table.rows.insert(id, plant.clone());
        plant
    }

    /// Merge the supplied fields onto an existing plant.
    ///
    /// Returns `None` if no plant with the given `id` exists.
    pub async fn update(pool: &MemoryDb, id: DbId, input: &UpdatePlant) -> Option<Plant> {
        let mut table = pool.plants.write().await;
        let plant = table.rows.get_mut(&id)?;
        input.apply_to(plant, Utc::now());
        Some(plant.clone())
    }

    /// Delete a plant by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &MemoryDb, id: DbId) -> bool {
        pool.plants.write().await.rows.remove(&id).is_some()
    }
}
