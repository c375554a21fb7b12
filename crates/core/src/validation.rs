//! Request-payload validation shared by every mutation path.
//!
//! Payload types declare their field rules with `validator` derives; this
//! module turns a failed check into a single [`CoreError::Validation`]
//! naming every offending field, so callers can reject input before any
//! store mutation happens.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Run the derived field rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Flatten field errors into `"<message>; <message>"`, ordered by field name
/// so the output is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", err.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
