//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `openweather` - Geocoding and current weather (OpenWeatherMap)
//! - `translate` - Language detection and translation (Cloud Translation)
//! - `mock` - In-memory stand-ins for tests
//! - `http` - Inbound webhook endpoint (axum)

pub mod http;
pub mod mock;
pub mod openweather;
pub mod translate;

mod outbound;

pub use openweather::{OpenWeatherClient, OpenWeatherConfig};
pub use translate::{CloudTranslationClient, CloudTranslationConfig};
