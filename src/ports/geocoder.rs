//! Geocoder Port - Resolves a place name to coordinates.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::Coordinates;

/// Port for forward geocoding.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Look up `city`, returning at most `limit` hits ordered by relevance.
    ///
    /// An empty vector is a successful answer meaning "no match".
    async fn lookup(&self, city: &str, limit: u32) -> Result<Vec<Coordinates>, ServiceError>;
}
