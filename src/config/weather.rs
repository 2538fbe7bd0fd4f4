//! Weather service configuration (OpenWeatherMap)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::is_http_url;
use crate::adapters::openweather::{DEFAULT_GEOCODING_BASE_URL, DEFAULT_WEATHER_BASE_URL};

/// OpenWeatherMap configuration. One key serves geocoding and weather.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,

    /// Geocoding API base URL
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,

    /// Current Weather API base URL
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl WeatherConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate weather configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("WEATHER__API_KEY"));
        }
        if !is_http_url(&self.geocoding_base_url) {
            return Err(ValidationError::InvalidUrl("WEATHER__GEOCODING_BASE_URL"));
        }
        if !is_http_url(&self.weather_base_url) {
            return Err(ValidationError::InvalidUrl("WEATHER__WEATHER_BASE_URL"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidClientTimeout("weather"));
        }
        Ok(())
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            geocoding_base_url: default_geocoding_base_url(),
            weather_base_url: default_weather_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_geocoding_base_url() -> String {
    DEFAULT_GEOCODING_BASE_URL.to_string()
}

fn default_weather_base_url() -> String {
    DEFAULT_WEATHER_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    5
}
