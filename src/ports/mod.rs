//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `Geocoder` - City name to coordinates
//! - `LanguageService` - Language detection and translation
//! - `WeatherService` - Current weather at a coordinate

mod geocoder;
mod language_service;
mod service_error;
mod weather_service;

pub use geocoder::Geocoder;
pub use language_service::LanguageService;
pub use service_error::ServiceError;
pub use weather_service::WeatherService;
