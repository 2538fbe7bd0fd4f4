//! OpenWeatherMap adapter.
//!
//! One client serves both the `Geocoder` port (Geocoding API, `direct`
//! endpoint) and the `WeatherService` port (Current Weather API).
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenWeatherConfig::new(api_key)
//!     .with_timeout(Duration::from_secs(5));
//!
//! let client = Arc::new(OpenWeatherClient::new(config)?);
//! ```

mod geocoder;
mod weather;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::outbound::build_client;
use crate::ports::ServiceError;

pub const DEFAULT_GEOCODING_BASE_URL: &str = "http://api.openweathermap.org/geo/1.0";
pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Configuration for the OpenWeatherMap client.
#[derive(Debug, Clone)]
pub struct OpenWeatherConfig {
    api_key: SecretString,
    /// Base URL of the Geocoding API.
    pub geocoding_base_url: String,
    /// Base URL of the Current Weather API.
    pub weather_base_url: String,
    /// Per-call timeout.
    pub timeout: Duration,
}

impl OpenWeatherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_geocoding_base_url(mut self, url: impl Into<String>) -> Self {
        self.geocoding_base_url = url.into();
        self
    }

    pub fn with_weather_base_url(mut self, url: impl Into<String>) -> Self {
        self.weather_base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenWeatherMap HTTP client. Build once and share across turns.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    config: OpenWeatherConfig,
    client: Client,
}

impl OpenWeatherClient {
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ServiceError> {
        let client = build_client(config.timeout)?;
        Ok(Self { config, client })
    }

    fn direct_geocoding_url(&self) -> String {
        format!("{}/direct", self.config.geocoding_base_url.trim_end_matches('/'))
    }

    fn current_weather_url(&self) -> String {
        format!("{}/weather", self.config.weather_base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = OpenWeatherConfig::new("test-key")
            .with_geocoding_base_url("http://localhost:1/geo")
            .with_weather_base_url("http://localhost:1/data")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(config.api_key(), "test-key");
        assert_eq!(config.geocoding_base_url, "http://localhost:1/geo");
        assert_eq!(config.weather_base_url, "http://localhost:1/data");
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn default_endpoints() {
        let client = OpenWeatherClient::new(OpenWeatherConfig::new("k")).unwrap();
        assert_eq!(
            client.direct_geocoding_url(),
            "http://api.openweathermap.org/geo/1.0/direct"
        );
        assert_eq!(
            client.current_weather_url(),
            "https://api.openweathermap.org/data/2.5/weather"
        );
    }

    #[test]
    fn debug_output_hides_api_key() {
        let config = OpenWeatherConfig::new("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
