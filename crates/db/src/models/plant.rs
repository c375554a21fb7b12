//! Plant models and DTOs.
//!
//! A plant owns two care cadences: watering (always present) and
//! fertilizing (optional). `fertilize_frequency` and `last_fertilized` are
//! kept jointly present or jointly absent.

use greencare_core::care_schedule::{CareKind, CareSchedule};
use greencare_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::patch::{non_null, nullable};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A user-owned plant record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub image: String,
    /// Days between waterings, 1..=60.
    pub water_frequency: i32,
    pub sunlight_needs: String,
    pub last_watered: Option<Timestamp>,
    pub notes: Option<String>,
    /// Days between fertilizings, 1..=90.
    pub fertilize_frequency: Option<i32>,
    pub last_fertilized: Option<Timestamp>,
}

impl Plant {
    /// Build a new record from a create payload. Both care clocks start at
    /// `now`; the fertilizing clock only when a cadence is configured.
    pub fn from_create(id: DbId, input: &CreatePlant, now: Timestamp) -> Self {
        Self {
            id,
            name: input.name.clone(),
            species: input.species.clone(),
            image: input.image.clone(),
            water_frequency: input.water_frequency,
            sunlight_needs: input.sunlight_needs.clone(),
            last_watered: Some(now),
            notes: input.notes.clone().filter(|n| !n.is_empty()),
            fertilize_frequency: input.fertilize_frequency,
            last_fertilized: input.fertilize_frequency.map(|_| now),
        }
    }

    pub fn watering_schedule(&self, now: Timestamp) -> CareSchedule {
        CareSchedule::evaluate(self.water_frequency, self.last_watered, now)
    }

    /// `None` when the plant has no fertilizing cadence.
    pub fn fertilizing_schedule(&self, now: Timestamp) -> Option<CareSchedule> {
        self.fertilize_frequency
            .map(|frequency| CareSchedule::evaluate(frequency, self.last_fertilized, now))
    }

    /// Every care action currently due for this plant, watering first.
    pub fn due_items(&self, now: Timestamp) -> Vec<DueCareItem> {
        let schedules = [
            Some((CareKind::Watering, self.watering_schedule(now))),
            self.fertilizing_schedule(now)
                .map(|s| (CareKind::Fertilizing, s)),
        ];

        schedules
            .into_iter()
            .flatten()
            .filter(|(_, schedule)| schedule.is_due)
            .map(|(kind, schedule)| DueCareItem {
                plant_id: self.id,
                plant_name: self.name.clone(),
                kind,
                days_overdue: schedule.days_overdue(),
            })
            .collect()
    }

    /// Restore the fertilizing invariant after a merge: no cadence means no
    /// clock, and a newly added cadence starts its clock at `now`.
    fn reconcile_fertilizing(&mut self, now: Timestamp) {
        match self.fertilize_frequency {
            None => self.last_fertilized = None,
            Some(_) if self.last_fertilized.is_none() => self.last_fertilized = Some(now),
            Some(_) => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Scheduler output for both cadences of one plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantCareStatus {
    pub plant_id: DbId,
    pub watering: CareSchedule,
    pub fertilizing: Option<CareSchedule>,
}

impl PlantCareStatus {
    pub fn of(plant: &Plant, now: Timestamp) -> Self {
        Self {
            plant_id: plant.id,
            watering: plant.watering_schedule(now),
            fertilizing: plant.fertilizing_schedule(now),
        }
    }
}

/// One entry of the due-care dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueCareItem {
    pub plant_id: DbId,
    pub plant_name: String,
    pub kind: CareKind,
    pub days_overdue: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a plant. `id`, `lastWatered` and `lastFertilized` are
/// assigned by the store and ignored if sent.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlant {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub species: String,
    pub image: String,
    #[validate(range(min = 1, max = 60, message = "waterFrequency must be between 1 and 60"))]
    pub water_frequency: i32,
    pub sunlight_needs: String,
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(
        min = 1,
        max = 90,
        message = "fertilizeFrequency must be between 1 and 90"
    ))]
    pub fertilize_frequency: Option<i32>,
}

/// DTO for partially updating a plant. Absent fields are left untouched;
/// `null` is only accepted for `notes`, where it clears the value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlant {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub species: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(min = 1, max = 60, message = "waterFrequency must be between 1 and 60"))]
    pub water_frequency: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub sunlight_needs: Option<String>,
    /// `Some(None)` clears the notes.
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(
        min = 1,
        max = 90,
        message = "fertilizeFrequency must be between 1 and 90"
    ))]
    pub fertilize_frequency: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub last_watered: Option<Timestamp>,
    #[serde(default, deserialize_with = "non_null")]
    pub last_fertilized: Option<Timestamp>,
}

impl UpdatePlant {
    /// The "mark watered" update.
    pub fn watered_at(now: Timestamp) -> Self {
        Self {
            last_watered: Some(now),
            ..Self::default()
        }
    }

    /// The "mark fertilized" update.
    pub fn fertilized_at(now: Timestamp) -> Self {
        Self {
            last_fertilized: Some(now),
            ..Self::default()
        }
    }

    /// Merge the supplied fields onto `plant`.
    pub fn apply_to(&self, plant: &mut Plant, now: Timestamp) {
        if let Some(name) = &self.name {
            plant.name.clone_from(name);
        }
        if let Some(species) = &self.species {
            plant.species.clone_from(species);
        }
        if let Some(image) = &self.image {
            plant.image.clone_from(image);
        }
        if let Some(water_frequency) = self.water_frequency {
            plant.water_frequency = water_frequency;
        }
        if let Some(sunlight_needs) = &self.sunlight_needs {
            plant.sunlight_needs.clone_from(sunlight_needs);
        }
        if let Some(notes) = &self.notes {
            plant.notes = notes.clone().filter(|n| !n.is_empty());
        }
        if let Some(fertilize_frequency) = self.fertilize_frequency {
            plant.fertilize_frequency = Some(fertilize_frequency);
        }
        if let Some(last_watered) = self.last_watered {
            plant.last_watered = Some(last_watered);
        }
        if let Some(last_fertilized) = self.last_fertilized {
            plant.last_fertilized = Some(last_fertilized);
        }
        plant.reconcile_fertilizing(now);
    }
}
