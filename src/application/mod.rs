//! Application layer - Turn handling.
//!
//! This layer decodes turns, dispatches them by intent and coordinates the
//! external service ports a handler needs.

pub mod handlers;

pub use handlers::{FulfillTurnHandler, FulfillmentError, WeatherQueryHandler};
