//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as stored and returned by the API
//! - A `Deserialize` + `Validate` create DTO
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!   where the entity is mutable

pub mod care_guide;
mod patch;
pub mod plant;
pub mod plant_template;
