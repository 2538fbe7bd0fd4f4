//! Language Service Port - Language detection and text translation.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::LanguageTag;

/// Port for a machine translation provider.
#[async_trait]
pub trait LanguageService: Send + Sync {
    /// Detect the language of `text`, returning the top detection.
    ///
    /// Fails with [`ServiceError::EmptyResult`] when the provider has no
    /// detection for the input.
    async fn detect(&self, text: &str) -> Result<LanguageTag, ServiceError>;

    /// Translate `text` into `target`.
    async fn translate(&self, target: &LanguageTag, text: &str) -> Result<String, ServiceError>;
}
