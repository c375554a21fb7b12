//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&MemoryDb` as the first argument.

pub mod care_guide_repo;
pub mod plant_repo;
pub mod plant_template_repo;

pub use care_guide_repo::CareGuideRepo;
pub use plant_repo::PlantRepo;
pub use plant_template_repo::PlantTemplateRepo;
