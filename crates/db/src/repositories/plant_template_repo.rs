//! Read access to the static plant template table.

use crate::models::plant_template::PlantTemplate;
use crate::seed::PLANT_TEMPLATES;

/// Plant templates are compiled in, so no store handle is needed.
pub struct PlantTemplateRepo;

impl PlantTemplateRepo {
    pub fn list() -> &'static [PlantTemplate] {
        PLANT_TEMPLATES
    }

    /// Exact-match lookup by species name.
    pub fn find_by_species(species: &str) -> Option<&'static PlantTemplate> {
        PLANT_TEMPLATES.iter().find(|t| t.species == species)
    }
}
