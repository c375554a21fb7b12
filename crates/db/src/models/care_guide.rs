//! Care guide models and DTOs.
//!
//! Care guides are reference text keyed by exact species name. They are
//! seeded at startup and never edited through the API.

use greencare_core::types::DbId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Care instructions for one species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareGuide {
    pub id: DbId,
    pub species: String,
    pub watering_guide: String,
    pub sunlight_guide: String,
    pub fertilizing_guide: Option<String>,
    pub common_issues: Option<String>,
}

/// DTO for adding a care guide to the catalog.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCareGuide {
    #[validate(length(min = 1, message = "species must not be empty"))]
    pub species: String,
    pub watering_guide: String,
    pub sunlight_guide: String,
    pub fertilizing_guide: Option<String>,
    pub common_issues: Option<String>,
}
