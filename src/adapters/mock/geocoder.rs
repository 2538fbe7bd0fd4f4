//! Mock geocoder.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::Coordinates;
use crate::ports::{Geocoder, ServiceError};

/// A recorded `lookup` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodeCall {
    pub city: String,
    pub limit: u32,
}

#[derive(Debug, Clone)]
pub struct MockGeocoder {
    result: Result<Vec<Coordinates>, ServiceError>,
    delay: Duration,
    calls: Arc<Mutex<Vec<GeocodeCall>>>,
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::with_hits(Vec::new())
    }
}

impl MockGeocoder {
    /// Answers every lookup with `hits`.
    pub fn with_hits(hits: Vec<Coordinates>) -> Self {
        Self {
            result: Ok(hits),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every lookup with `error`.
    pub fn failing(error: ServiceError) -> Self {
        Self {
            result: Err(error),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> Vec<GeocodeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for MockGeocoder {
    async fn lookup(&self, city: &str, limit: u32) -> Result<Vec<Coordinates>, ServiceError> {
        self.calls.lock().unwrap().push(GeocodeCall {
            city: city.to_string(),
            limit,
        });

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.result.clone()
    }
}
