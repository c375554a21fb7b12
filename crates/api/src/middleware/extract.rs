//! Request extractors that reject malformed input with [`AppError`].
//!
//! Axum's stock `Path` and `Json` rejections answer with plain-text bodies
//! (and 422 for JSON data errors). These wrappers turn every rejection into
//! the JSON error envelope with a 400 status, and run the payload's field
//! rules before a handler ever sees it.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use greencare_core::types::DbId;
use greencare_core::validation::validate_input;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

const INVALID_PLANT_ID: &str = "Invalid plant ID";

/// The `{id}` path segment of a plant route, parsed as an integer.
///
/// A non-integer segment is a 400, distinct from a well-formed id with no
/// matching plant (404, reported by the handler).
#[derive(Debug, Clone, Copy)]
pub struct PlantId(pub DbId);

impl<S> FromRequestParts<S> for PlantId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::BadRequest(INVALID_PLANT_ID.into()))?;

        raw.parse::<DbId>()
            .map(PlantId)
            .map_err(|_| AppError::BadRequest(INVALID_PLANT_ID.into()))
    }
}

/// A JSON body that has been deserialized and passed its `validator` rules.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreatePlant>) -> AppResult<...> {
///     // input.water_frequency is guaranteed to be within 1..=60 here
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        validate_input(&value)?;
        Ok(ValidatedJson(value))
    }
}
