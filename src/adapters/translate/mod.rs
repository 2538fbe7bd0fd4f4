//! Cloud Translation adapter.
//!
//! Implements the `LanguageService` port against the Cloud Translation
//! Basic (v2) REST API, authenticated with an API key.

mod cloud_translation;

pub use cloud_translation::{CloudTranslationClient, CloudTranslationConfig, DEFAULT_BASE_URL};
