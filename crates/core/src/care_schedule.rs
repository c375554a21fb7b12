//! Care-due computation for watering and fertilizing cadences.
//!
//! Due status is never stored. It is recomputed from the cadence, the last
//! action timestamp and the current time on every read, so "last watered"
//! and "needs water" cannot drift apart.

use serde::Serialize;

use crate::types::Timestamp;

const SECONDS_PER_DAY: i64 = 86_400;

// ---------------------------------------------------------------------------
// Care kinds
// ---------------------------------------------------------------------------

/// The kind of care action a cadence applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CareKind {
    Watering,
    Fertilizing,
}

impl CareKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CareKind::Watering => "watering",
            CareKind::Fertilizing => "fertilizing",
        }
    }
}

// ---------------------------------------------------------------------------
// Pure computations
// ---------------------------------------------------------------------------

/// Whole days elapsed between `last_action` and `now`, floored.
///
/// A plant that was never acted on counts as `frequency_days` days ago, so it
/// reports as due immediately. A `last_action` in the future yields a
/// negative count.
pub fn days_since(last_action: Option<Timestamp>, frequency_days: i32, now: Timestamp) -> i64 {
    match last_action {
        Some(last) => (now - last).num_seconds().div_euclid(SECONDS_PER_DAY),
        None => i64::from(frequency_days),
    }
}

/// Whether the action is due. The boundary is inclusive: a plant watered
/// exactly `frequency_days` days ago is due today.
pub fn is_due(frequency_days: i32, last_action: Option<Timestamp>, now: Timestamp) -> bool {
    days_since(last_action, frequency_days, now) >= i64::from(frequency_days)
}

/// Days left until the action is due. Zero means due today, negative means
/// overdue by that many days.
pub fn days_until_due(frequency_days: i32, last_action: Option<Timestamp>, now: Timestamp) -> i64 {
    i64::from(frequency_days) - days_since(last_action, frequency_days, now)
}

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// Scheduler output for one kind of care on one plant at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareSchedule {
    pub frequency_days: i32,
    pub last_action: Option<Timestamp>,
    pub days_since: i64,
    pub days_until_due: i64,
    pub is_due: bool,
}

impl CareSchedule {
    pub fn evaluate(frequency_days: i32, last_action: Option<Timestamp>, now: Timestamp) -> Self {
        let elapsed = days_since(last_action, frequency_days, now);
        let until = i64::from(frequency_days) - elapsed;
        Self {
            frequency_days,
            last_action,
            days_since: elapsed,
            days_until_due: until,
            is_due: until <= 0,
        }
    }

    /// Days past the due date; `0` when due today. Only meaningful when
    /// [`CareSchedule::is_due`] holds.
    pub fn days_overdue(&self) -> i64 {
        -self.days_until_due
    }
}
