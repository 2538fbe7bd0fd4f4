//! `Geocoder` implementation over the OpenWeatherMap Geocoding API.

use async_trait::async_trait;
use serde::Deserialize;

use super::OpenWeatherClient;
use crate::adapters::outbound::{check_status, send_error};
use crate::domain::Coordinates;
use crate::ports::{Geocoder, ServiceError};

/// One hit of `GET /geo/1.0/direct`. Name, country and state are ignored;
/// a missing coordinate reads as zero.
#[derive(Debug, Deserialize)]
struct DirectGeocodingHit {
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

#[async_trait]
impl Geocoder for OpenWeatherClient {
    async fn lookup(&self, city: &str, limit: u32) -> Result<Vec<Coordinates>, ServiceError> {
        tracing::debug!(city, limit, "geocoding city");

        let limit = limit.to_string();
        let response = self
            .client
            .get(self.direct_geocoding_url())
            .query(&[
                ("q", city),
                ("limit", limit.as_str()),
                ("appid", self.config.api_key()),
            ])
            .send()
            .await
            .map_err(|e| send_error(e, self.config.timeout))?;
        let response = check_status(response).await?;

        let hits: Vec<DirectGeocodingHit> = response
            .json()
            .await
            .map_err(|e| ServiceError::parse(format!("Failed to parse geocoding response: {}", e)))?;

        tracing::debug!(city, hits = hits.len(), "geocoding finished");

        Ok(hits
            .into_iter()
            .map(|hit| Coordinates::new(hit.lat, hit.lon))
            .collect())
    }
}
