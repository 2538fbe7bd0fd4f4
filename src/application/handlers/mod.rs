//! Application handlers.
//!
//! Turn handlers that orchestrate domain operations over the ports.

pub mod fulfillment;

pub use fulfillment::{FulfillTurnHandler, FulfillmentError, WeatherQueryHandler};
