//! Fulfillment Webhook - Dialog platform fulfillment endpoint
//!
//! This crate receives conversation turns from a dialog platform, dispatches
//! them by intent, and answers the `weather` intent with a localized sentence
//! built from geocoding, language detection, weather and translation services.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
