//! Current weather conditions.

use serde::{Deserialize, Serialize};

/// One entry of the weather service's condition list. Missing members
/// read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Condition group, e.g. `Clouds`. Always English.
    #[serde(default)]
    pub main: String,
    /// Free-text description, already localized by the weather service.
    #[serde(default)]
    pub description: String,
}

impl WeatherCondition {
    pub fn new(main: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_members_read_as_empty() {
        let condition: WeatherCondition = serde_json::from_str(r#"{"id": 803}"#).unwrap();
        assert_eq!(condition, WeatherCondition::new("", ""));

        let condition: WeatherCondition =
            serde_json::from_str(r#"{"main": "Clouds"}"#).unwrap();
        assert_eq!(condition, WeatherCondition::new("Clouds", ""));
    }
}
