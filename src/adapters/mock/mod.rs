//! Mock service adapters for testing.
//!
//! Each mock returns a fixed, configurable answer, can simulate latency,
//! and records every call so tests can assert on what was sent.

mod geocoder;
mod language;
mod weather;

pub use geocoder::{GeocodeCall, MockGeocoder};
pub use language::{MockLanguageService, MockTranslation};
pub use weather::{MockWeatherService, WeatherCall};
