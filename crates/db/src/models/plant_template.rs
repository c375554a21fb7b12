//! Suggested defaults for creating a plant of a known species.

use serde::Serialize;

/// Prefill values for the plant creation form. Templates are static and have
/// no identity of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantTemplate {
    pub species: &'static str,
    pub water_frequency: i32,
    pub sunlight_needs: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertilize_frequency: Option<i32>,
    pub image_url: &'static str,
}
