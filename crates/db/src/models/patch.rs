//! Field deserializers for request DTOs that must tell an absent key apart
//! from an explicit `null`.
//!
//! Both are meant for use with `#[serde(default, deserialize_with = ...)]`,
//! so a missing key still falls back to `None`.

use serde::de::{self, Deserialize, Deserializer, Unexpected};

/// Deserialize a nullable field into `Some(None)` for `null` and
/// `Some(Some(v))` for a value. Absent keys stay `None` via `default`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional field that may be omitted but never `null`.
pub(crate) fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| de::Error::invalid_type(Unexpected::Other("null"), &"a value"))
}
