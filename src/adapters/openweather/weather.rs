//! `WeatherService` implementation over the OpenWeatherMap Current Weather API.

use async_trait::async_trait;
use serde::Deserialize;

use super::OpenWeatherClient;
use crate::adapters::outbound::{check_status, send_error};
use crate::domain::{Coordinates, WeatherCondition};
use crate::ports::{ServiceError, WeatherService};

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    weather: Vec<WeatherCondition>,
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn current(
        &self,
        coordinates: Coordinates,
        lang: &str,
    ) -> Result<Vec<WeatherCondition>, ServiceError> {
        let lat = coordinates.lat_param();
        let lon = coordinates.lon_param();
        tracing::debug!(%lat, %lon, lang, "fetching current weather");

        let response = self
            .client
            .get(self.current_weather_url())
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.config.api_key()),
                ("lang", lang),
            ])
            .send()
            .await
            .map_err(|e| send_error(e, self.config.timeout))?;
        let response = check_status(response).await?;

        let body: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::parse(format!("Failed to parse weather response: {}", e)))?;

        for condition in &body.weather {
            tracing::debug!(
                main = %condition.main,
                description = %condition.description,
                "weather condition"
            );
        }

        Ok(body.weather)
    }
}
