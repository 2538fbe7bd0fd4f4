//! WeatherQueryHandler - Localized current-weather sentence for a city.
//!
//! Flow for one turn:
//!
//! 1. Geocode the city and detect its language (concurrently).
//! 2. Map the detected tag to the weather service's language code.
//! 3. Fetch current conditions at the first geocoding hit.
//! 4. Translate the fixed labels and the condition group into the detected
//!    language (concurrently). A failed translation yields an empty fragment.
//! 5. Assemble the sentence.

use std::sync::Arc;

use crate::domain::{LanguageTag, TurnRequest, TurnResponse, WeatherCondition};
use crate::ports::{Geocoder, LanguageService, WeatherService};

use super::FulfillmentError;

/// Only the best geocoding hit is used.
pub const GEOCODE_LIMIT: u32 = 1;

pub const CURRENT_CITY_LABEL: &str = "Current city is ";
pub const MAIN_LABEL: &str = "Main";
pub const DESCRIPTION_LABEL: &str = "Description";

/// Handler for the `weather` intent.
#[derive(Clone)]
pub struct WeatherQueryHandler {
    geocoder: Arc<dyn Geocoder>,
    language: Arc<dyn LanguageService>,
    weather: Arc<dyn WeatherService>,
}

impl WeatherQueryHandler {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        language: Arc<dyn LanguageService>,
        weather: Arc<dyn WeatherService>,
    ) -> Self {
        Self {
            geocoder,
            language,
            weather,
        }
    }

    pub async fn handle(&self, request: &TurnRequest) -> Result<TurnResponse, FulfillmentError> {
        let city = request.city();

        // Both depend only on the city. Results are checked in geocode-first
        // order so error precedence does not depend on timing.
        let (hits, detected) = tokio::join!(
            self.geocoder.lookup(city, GEOCODE_LIMIT),
            self.language.detect(city)
        );

        let coordinates = hits
            .map_err(FulfillmentError::Geocode)?
            .into_iter()
            .next()
            .ok_or_else(|| FulfillmentError::GeocodeEmpty(city.to_string()))?;
        let tag = detected.map_err(FulfillmentError::Detect)?;

        let weather_lang = tag.weather_language();
        tracing::debug!(
            city,
            lat = coordinates.lat,
            lon = coordinates.lon,
            language = %tag,
            weather_lang,
            "resolved city"
        );

        let condition = self
            .weather
            .current(coordinates, weather_lang)
            .await
            .map_err(FulfillmentError::Weather)?
            .into_iter()
            .next()
            .ok_or(FulfillmentError::WeatherEmpty)?;

        let sentence = self.localized_sentence(&tag, city, &condition).await;
        Ok(TurnResponse::single_text(sentence))
    }

    async fn localized_sentence(
        &self,
        tag: &LanguageTag,
        city: &str,
        condition: &WeatherCondition,
    ) -> String {
        let (current_city, main_label, description_label, main) = futures::join!(
            self.translate_or_empty(tag, CURRENT_CITY_LABEL),
            self.translate_or_empty(tag, MAIN_LABEL),
            self.translate_or_empty(tag, DESCRIPTION_LABEL),
            self.translate_or_empty(tag, &condition.main),
        );

        // The description already arrives in the weather language.
        [
            current_city.as_str(),
            city,
            main_label.as_str(),
            main.as_str(),
            description_label.as_str(),
            condition.description.as_str(),
        ]
        .concat()
    }

    async fn translate_or_empty(&self, tag: &LanguageTag, text: &str) -> String {
        match self.language.translate(tag, text).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(target_language = %tag, text, error = %e, "translation failed, leaving fragment empty");
                String::new()
            }
        }
    }
}
