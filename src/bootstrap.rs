//! Wiring of configuration, adapters and the HTTP router.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::adapters::http::{webhook_router, WebhookAppState};
use crate::adapters::{
    CloudTranslationClient, CloudTranslationConfig, OpenWeatherClient, OpenWeatherConfig,
};
use crate::application::{FulfillTurnHandler, WeatherQueryHandler};
use crate::config::{AppConfig, ConfigError, LogFormat, ServerConfig, ValidationError};
use crate::ports::ServiceError;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to build {client} client: {source}")]
    Client {
        client: &'static str,
        #[source]
        source: ServiceError,
    },
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Installs the global tracing subscriber. `RUST_LOG` wins over the
/// configured filter when set.
pub fn init_logging(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    match server.log_format {
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
    }
}

/// Builds the turn handler with long-lived service clients shared by all turns.
pub fn build_fulfillment(config: &AppConfig) -> Result<FulfillTurnHandler, BootstrapError> {
    let openweather = Arc::new(
        OpenWeatherClient::new(
            OpenWeatherConfig::new(config.weather.api_key.clone())
                .with_geocoding_base_url(config.weather.geocoding_base_url.clone())
                .with_weather_base_url(config.weather.weather_base_url.clone())
                .with_timeout(config.weather.timeout()),
        )
        .map_err(|source| BootstrapError::Client {
            client: "openweather",
            source,
        })?,
    );

    let translation = Arc::new(
        CloudTranslationClient::new(
            CloudTranslationConfig::new(config.translation.api_key.clone())
                .with_base_url(config.translation.base_url.clone())
                .with_timeout(config.translation.timeout()),
        )
        .map_err(|source| BootstrapError::Client {
            client: "translation",
            source,
        })?,
    );

    let weather = WeatherQueryHandler::new(openweather.clone(), translation, openweather);
    Ok(FulfillTurnHandler::new(weather).with_turn_timeout(config.server.turn_timeout()))
}

/// The complete application router.
pub fn build_router(fulfillment: FulfillTurnHandler) -> Router {
    webhook_router()
        .with_state(WebhookAppState::new(fulfillment))
        .layer(TraceLayer::new_for_http())
}

/// Serves until Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), BootstrapError> {
    let addr = config.server.socket_addr()?;
    let router = build_router(build_fulfillment(&config)?);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "fulfillment webhook listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("fulfillment webhook stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TranslationConfig, WeatherConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_config() -> AppConfig {
        AppConfig {
            weather: WeatherConfig {
                api_key: "owm".to_string(),
                ..Default::default()
            },
            translation: TranslationConfig {
                api_key: "gcp".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn router_serves_static_intents_without_network() {
        let router = build_router(build_fulfillment(&test_config()).unwrap());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from(
                        r#"{"queryResult":{"intent":{"displayName":"Default Welcome Intent"}}}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
