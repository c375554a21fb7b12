//! Domain logic shared by the store and the HTTP layer.
//!
//! This crate has no internal dependencies so the scheduler and validation
//! rules can be unit-tested (and reused) without a store or a server.

pub mod care_schedule;
pub mod error;
pub mod types;
pub mod validation;
