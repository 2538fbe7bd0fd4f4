//! Translation service configuration (Cloud Translation)

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::is_http_url;
use crate::adapters::translate::DEFAULT_BASE_URL;

/// Cloud Translation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationConfig {
    /// Cloud Translation API key
    #[serde(default)]
    pub api_key: String,

    /// Translation v2 base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("TRANSLATION__API_KEY"));
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidUrl("TRANSLATION__BASE_URL"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidClientTimeout("translation"));
        }
        Ok(())
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    5
}
