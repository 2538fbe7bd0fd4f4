//! Domain layer containing the webhook's vocabulary.
//!
//! # Module Organization
//!
//! - `envelope` - Turn request/response wire types
//! - `intent` - Recognized intents and dispatch keys
//! - `language` - Language tags and the weather-language map
//! - `location` - Coordinates and their query-string rendering
//! - `weather` - Weather conditions

pub mod envelope;
pub mod intent;
pub mod language;
pub mod location;
pub mod weather;

pub use envelope::{Message, TextMessage, TurnRequest, TurnResponse};
pub use intent::{Intent, UnknownIntent};
pub use language::{LanguageTag, DEFAULT_WEATHER_LANGUAGE, WEATHER_LANGUAGES};
pub use location::{format_coordinate, Coordinates};
pub use weather::WeatherCondition;
