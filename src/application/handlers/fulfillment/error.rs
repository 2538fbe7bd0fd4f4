//! Errors that end a turn with a failure response.

use thiserror::Error;

use crate::domain::UnknownIntent;
use crate::ports::ServiceError;

/// Fatal turn failure. Rendered to the platform as `ERROR: {self}`.
///
/// Translation failures never appear here; they only blank a fragment.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    /// Request body was not a valid envelope.
    #[error("{0}")]
    Decode(#[source] serde_json::Error),

    #[error(transparent)]
    UnknownIntent(#[from] UnknownIntent),

    #[error("geocoding failed: {0}")]
    Geocode(#[source] ServiceError),

    #[error("no location found for city {0:?}")]
    GeocodeEmpty(String),

    #[error("language detection failed: {0}")]
    Detect(#[source] ServiceError),

    #[error("weather lookup failed: {0}")]
    Weather(#[source] ServiceError),

    #[error("weather service returned no conditions")]
    WeatherEmpty,

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),

    /// The turn did not finish within its deadline.
    #[error("turn not fulfilled within {timeout_ms}ms")]
    DeadlineExceeded { timeout_ms: u64 },
}
