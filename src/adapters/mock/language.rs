//! Mock language service.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::domain::LanguageTag;
use crate::ports::{LanguageService, ServiceError};

/// How the mock answers `translate`.
#[derive(Debug, Clone)]
pub enum MockTranslation {
    /// Returns the input unchanged.
    Identity,
    /// Returns the input with a suffix appended.
    Append(String),
    /// Fails every translation.
    Fail(ServiceError),
}

#[derive(Debug, Clone)]
pub struct MockLanguageService {
    detection: Result<LanguageTag, ServiceError>,
    translation: MockTranslation,
    failing_texts: HashSet<String>,
    detect_calls: Arc<Mutex<Vec<String>>>,
    translate_calls: Arc<Mutex<Vec<(LanguageTag, String)>>>,
}

impl MockLanguageService {
    /// Detects every input as `tag` and translates with identity.
    pub fn detecting(tag: impl Into<LanguageTag>) -> Self {
        Self {
            detection: Ok(tag.into()),
            translation: MockTranslation::Identity,
            failing_texts: HashSet::new(),
            detect_calls: Arc::new(Mutex::new(Vec::new())),
            translate_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fails every detection with `error`.
    pub fn failing_detection(error: ServiceError) -> Self {
        Self {
            detection: Err(error),
            ..Self::detecting("en")
        }
    }

    pub fn with_translation(mut self, translation: MockTranslation) -> Self {
        self.translation = translation;
        self
    }

    /// Makes translation of exactly `text` fail.
    pub fn with_failing_text(mut self, text: impl Into<String>) -> Self {
        self.failing_texts.insert(text.into());
        self
    }

    pub fn detect_calls(&self) -> Vec<String> {
        self.detect_calls.lock().unwrap().clone()
    }

    pub fn translate_calls(&self) -> Vec<(LanguageTag, String)> {
        self.translate_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageService for MockLanguageService {
    async fn detect(&self, text: &str) -> Result<LanguageTag, ServiceError> {
        self.detect_calls.lock().unwrap().push(text.to_string());
        self.detection.clone()
    }

    async fn translate(&self, target: &LanguageTag, text: &str) -> Result<String, ServiceError> {
        self.translate_calls
            .lock()
            .unwrap()
            .push((target.clone(), text.to_string()));

        if self.failing_texts.contains(text) {
            return Err(ServiceError::Status {
                status: 400,
                body: format!("cannot translate {}", text),
            });
        }

        match &self.translation {
            MockTranslation::Identity => Ok(text.to_string()),
            MockTranslation::Append(suffix) => Ok(format!("{}{}", text, suffix)),
            MockTranslation::Fail(error) => Err(error.clone()),
        }
    }
}
