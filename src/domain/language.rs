//! Language tags and the mapping onto weather-service language codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A BCP-47 language identifier as reported by the language service
/// (for example `en` or `zh-CN`). Kept verbatim; no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Weather-service language code for this tag.
    ///
    /// Exact match against [`WEATHER_LANGUAGES`]; anything else falls back
    /// to [`DEFAULT_WEATHER_LANGUAGE`].
    pub fn weather_language(&self) -> &'static str {
        WEATHER_LANGUAGES
            .iter()
            .find(|(tag, _)| *tag == self.0)
            .map(|(_, code)| *code)
            .unwrap_or(DEFAULT_WEATHER_LANGUAGE)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Detected tag -> weather-service `lang` parameter.
pub const WEATHER_LANGUAGES: [(&str, &str); 2] = [("en", "en"), ("zh-CN", "zh_cn")];

pub const DEFAULT_WEATHER_LANGUAGE: &str = "en";
