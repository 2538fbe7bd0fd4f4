//! Fulfillment handlers.
//!
//! - `codec` - Envelope decoding and encoding
//! - `fulfill_turn` - Intent dispatch under the turn deadline
//! - `static_intents` - Fixed-text intents
//! - `weather_query` - The `weather` intent

pub mod codec;
mod error;
mod fulfill_turn;
pub mod static_intents;
mod weather_query;

pub use codec::{decode_request, encode_response};
pub use error::FulfillmentError;
pub use fulfill_turn::{FulfillTurnHandler, DEFAULT_TURN_TIMEOUT};
pub use weather_query::{
    WeatherQueryHandler, CURRENT_CITY_LABEL, DESCRIPTION_LABEL, GEOCODE_LIMIT, MAIN_LABEL,
};
