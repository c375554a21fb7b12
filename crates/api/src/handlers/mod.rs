pub mod care_guides;
pub mod plant_templates;
pub mod plants;
