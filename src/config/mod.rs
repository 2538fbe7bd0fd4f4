//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FULFILLMENT_WEBHOOK` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use fulfillment_webhook::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod server;
mod translation;
mod weather;

pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};
pub use translation::TranslationConfig;
pub use weather::WeatherConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, turn deadline)
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather and geocoding provider (OpenWeatherMap)
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Language detection and translation provider
    #[serde(default)]
    pub translation: TranslationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FULFILLMENT_WEBHOOK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FULFILLMENT_WEBHOOK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FULFILLMENT_WEBHOOK__WEATHER__API_KEY=...` -> `weather.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Missing API keys are reported by [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FULFILLMENT_WEBHOOK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.weather.validate()?;
        self.translation.validate()?;
        Ok(())
    }
}

/// Accepts absolute `http://` or `https://` URLs.
fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("FULFILLMENT_WEBHOOK__WEATHER__API_KEY", "owm-key");
        env::set_var("FULFILLMENT_WEBHOOK__TRANSLATION__API_KEY", "gcp-key");
    }

    fn clear_env() {
        env::remove_var("FULFILLMENT_WEBHOOK__WEATHER__API_KEY");
        env::remove_var("FULFILLMENT_WEBHOOK__TRANSLATION__API_KEY");
        env::remove_var("FULFILLMENT_WEBHOOK__SERVER__PORT");
        env::remove_var("FULFILLMENT_WEBHOOK__SERVER__ENVIRONMENT");
        env::remove_var("FULFILLMENT_WEBHOOK__SERVER__LOG_FORMAT");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.weather.api_key, "owm-key");
        assert_eq!(config.translation.api_key, "gcp-key");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_keys_fail_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("WEATHER__API_KEY"))
        );
    }

    #[test]
    fn test_server_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("FULFILLMENT_WEBHOOK__SERVER__PORT", "3000");
        env::set_var("FULFILLMENT_WEBHOOK__SERVER__ENVIRONMENT", "production");
        env::set_var("FULFILLMENT_WEBHOOK__SERVER__LOG_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.server.log_format, LogFormat::Json);
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://translation.googleapis.com"));
        assert!(is_http_url("http://127.0.0.1:8080/geo"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("api.openweathermap.org"));
    }
}
