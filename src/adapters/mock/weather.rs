//! Mock weather service.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::{Coordinates, WeatherCondition};
use crate::ports::{ServiceError, WeatherService};

/// A recorded `current` call.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCall {
    pub coordinates: Coordinates,
    pub lang: String,
}

#[derive(Debug, Clone)]
pub struct MockWeatherService {
    result: Result<Vec<WeatherCondition>, ServiceError>,
    calls: Arc<Mutex<Vec<WeatherCall>>>,
}

impl Default for MockWeatherService {
    fn default() -> Self {
        Self::with_conditions(Vec::new())
    }
}

impl MockWeatherService {
    pub fn with_conditions(conditions: Vec<WeatherCondition>) -> Self {
        Self {
            result: Ok(conditions),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: ServiceError) -> Self {
        Self {
            result: Err(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<WeatherCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Language code of the most recent call.
    pub fn last_lang(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|c| c.lang.clone())
    }
}

#[async_trait]
impl WeatherService for MockWeatherService {
    async fn current(
        &self,
        coordinates: Coordinates,
        lang: &str,
    ) -> Result<Vec<WeatherCondition>, ServiceError> {
        self.calls.lock().unwrap().push(WeatherCall {
            coordinates,
            lang: lang.to_string(),
        });

        self.result.clone()
    }
}
