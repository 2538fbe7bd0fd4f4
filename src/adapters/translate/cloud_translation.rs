//! `LanguageService` over Cloud Translation v2.
//!
//! - Detection: `POST {base}/detect` with `{"q": [text]}`
//! - Translation: `POST {base}` with `{"q": [text], "target": tag, "format": "text"}`
//!
//! The source language of a translation is left to the provider.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::adapters::outbound::{build_client, check_status, send_error};
use crate::domain::LanguageTag;
use crate::ports::{LanguageService, ServiceError};

pub const DEFAULT_BASE_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Configuration for the Cloud Translation client.
#[derive(Debug, Clone)]
pub struct CloudTranslationConfig {
    api_key: SecretString,
    pub base_url: String,
    pub timeout: Duration,
}

impl CloudTranslationConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Cloud Translation HTTP client. Build once and share across turns.
#[derive(Debug, Clone)]
pub struct CloudTranslationClient {
    config: CloudTranslationConfig,
    client: Client,
}

impl CloudTranslationClient {
    pub fn new(config: CloudTranslationConfig) -> Result<Self, ServiceError> {
        let client = build_client(config.timeout)?;
        Ok(Self { config, client })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    async fn post<B, R>(&self, url: String, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let response = self
            .client
            .post(url)
            .query(&[("key", self.config.api_key())])
            .json(body)
            .send()
            .await
            .map_err(|e| send_error(e, self.config.timeout))?;
        let response = check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ServiceError::parse(format!("Failed to parse translation response: {}", e)))
    }
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct DetectResponse {
    data: DetectData,
}

#[derive(Debug, Deserialize)]
struct DetectData {
    #[serde(default)]
    detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: [&'a str; 1],
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateData {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
}

#[async_trait]
impl LanguageService for CloudTranslationClient {
    async fn detect(&self, text: &str) -> Result<LanguageTag, ServiceError> {
        let response: DetectResponse = self
            .post(format!("{}/detect", self.base_url()), &DetectRequest { q: [text] })
            .await?;

        let tag = response
            .data
            .detections
            .into_iter()
            .next()
            .and_then(|candidates| candidates.into_iter().next())
            .map(|detection| LanguageTag::new(detection.language))
            .ok_or_else(|| ServiceError::empty("language detection returned no candidates"))?;

        tracing::debug!(text, language = %tag, "detected language");
        Ok(tag)
    }

    async fn translate(&self, target: &LanguageTag, text: &str) -> Result<String, ServiceError> {
        let request = TranslateRequest {
            q: [text],
            target: target.as_str(),
            format: "text",
        };
        let response: TranslateResponse = self.post(self.base_url().to_string(), &request).await?;

        response
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or_else(|| ServiceError::empty(format!("translation returned nothing for: {}", text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::test_support::serve;
    use axum::{extract::Query, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn client_for(router: Router) -> CloudTranslationClient {
        let base = serve(router).await;
        CloudTranslationClient::new(CloudTranslationConfig::new("tr-key").with_base_url(base))
            .unwrap()
    }

    #[test]
    fn config_builder_works() {
        let config = CloudTranslationConfig::new("k")
            .with_base_url("http://localhost:9")
            .with_timeout(Duration::from_secs(1));
        assert_eq!(config.api_key(), "k");
        assert_eq!(config.base_url, "http://localhost:9");
        assert_eq!(config.timeout, Duration::from_secs(1));
    }

    #[tokio::test]
    async fn detect_returns_top_candidate() {
        let router = Router::new().route(
            "/detect",
            post(
                |Query(params): Query<HashMap<String, String>>, Json(body): Json<Value>| async move {
                    assert_eq!(params.get("key").map(String::as_str), Some("tr-key"));
                    assert_eq!(body, json!({ "q": ["北京"] }));
                    Json(json!({
                        "data": { "detections": [[
                            { "language": "zh-CN", "isReliable": false, "confidence": 1 },
                            { "language": "ja", "isReliable": false, "confidence": 0.2 }
                        ]] }
                    }))
                },
            ),
        );
        let client = client_for(router).await;

        assert_eq!(client.detect("北京").await.unwrap(), LanguageTag::from("zh-CN"));
    }

    #[tokio::test]
    async fn detect_without_candidates_fails() {
        let router = Router::new().route(
            "/detect",
            post(|| async { Json(json!({ "data": { "detections": [[]] } })) }),
        );
        let client = client_for(router).await;

        assert!(matches!(
            client.detect("???").await,
            Err(ServiceError::EmptyResult(_))
        ));
    }

    #[tokio::test]
    async fn translate_sends_target_and_plain_text_format() {
        let router = Router::new().route(
            "/",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(
                    body,
                    json!({ "q": ["Description"], "target": "zh-CN", "format": "text" })
                );
                Json(json!({
                    "data": { "translations": [
                        { "translatedText": "描述", "detectedSourceLanguage": "en" }
                    ] }
                }))
            }),
        );
        let client = client_for(router).await;

        let text = client
            .translate(&LanguageTag::from("zh-CN"), "Description")
            .await
            .unwrap();
        assert_eq!(text, "描述");
    }

    #[tokio::test]
    async fn provider_rejection_is_a_status_error() {
        let router = Router::new().route(
            "/",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    r#"{"error":{"code":400,"message":"Invalid Value"}}"#,
                )
            }),
        );
        let client = client_for(router).await;

        assert!(matches!(
            client.translate(&LanguageTag::from("xx-invalid"), "Main").await,
            Err(ServiceError::Status { status: 400, .. })
        ));
    }
}
