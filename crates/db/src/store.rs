use std::collections::BTreeMap;

use greencare_core::types::DbId;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::models::care_guide::CareGuide;
use crate::models::plant::Plant;

/// Process-wide plant and care guide tables.
///
/// Fields are only reachable from this crate's repositories, so every
/// mutation goes through a repository method. Each method takes a table lock
/// once, which keeps single mutations atomic.
#[derive(Debug, Default)]
pub struct MemoryDb {
    pub(crate) plants: RwLock<PlantTable>,
    pub(crate) care_guides: RwLock<CareGuideTable>,
}

#[derive(Debug)]
pub(crate) struct PlantTable {
    /// Keyed by id, so iteration follows creation order.
    pub(crate) rows: BTreeMap<DbId, Plant>,
    /// Never decremented; deleted ids are not reused.
    pub(crate) next_id: DbId,
}

impl Default for PlantTable {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug)]
pub(crate) struct CareGuideTable {
    /// Keyed by exact species name, in seed order.
    pub(crate) rows: IndexMap<String, CareGuide>,
    pub(crate) next_id: DbId,
}

impl Default for CareGuideTable {
    fn default() -> Self {
        Self {
            rows: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl PlantTable {
    pub(crate) fn allocate_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl CareGuideTable {
    pub(crate) fn allocate_id(&mut self) -> DbId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
