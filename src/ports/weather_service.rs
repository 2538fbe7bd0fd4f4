//! Weather Service Port - Current conditions at a coordinate.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::{Coordinates, WeatherCondition};

/// Port for a current-weather provider.
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Current conditions at `coordinates`, with descriptions localized to
    /// the provider language code `lang`.
    ///
    /// Conditions are ordered by the provider; the first is the primary one.
    async fn current(
        &self,
        coordinates: Coordinates,
        lang: &str,
    ) -> Result<Vec<WeatherCondition>, ServiceError>;
}
