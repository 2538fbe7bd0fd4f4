//! Geographic coordinates returned by geocoding.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude rendered for a query string.
    pub fn lat_param(&self) -> String {
        format_coordinate(self.lat)
    }

    /// Longitude rendered for a query string.
    pub fn lon_param(&self) -> String {
        format_coordinate(self.lon)
    }
}

/// Shortest decimal string that round-trips through a 32-bit float.
///
/// `f32`'s `Display` never switches to exponent notation, so coordinates
/// always render as plain decimals.
pub fn format_coordinate(value: f64) -> String {
    (value as f32).to_string()
}
