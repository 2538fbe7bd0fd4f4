//! Axum router configuration for the webhook endpoint.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{fulfill_turn, health, WebhookAppState};

/// Create the webhook router.
///
/// # Routes
///
/// - `POST /` - Fulfil a turn (the platform posts to the configured URL root)
/// - `POST /webhook` - Same handler, for deployments mounted under a path
/// - `GET /health` - Liveness probe
pub fn webhook_router() -> Router<WebhookAppState> {
    Router::new()
        .route("/", post(fulfill_turn))
        .route("/webhook", post(fulfill_turn))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockGeocoder, MockLanguageService, MockWeatherService};
    use crate::application::{FulfillTurnHandler, WeatherQueryHandler};
    use crate::domain::{Coordinates, WeatherCondition};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let weather = WeatherQueryHandler::new(
            Arc::new(MockGeocoder::with_hits(vec![Coordinates::new(48.85, 2.35)])),
            Arc::new(MockLanguageService::detecting("en")),
            Arc::new(MockWeatherService::with_conditions(vec![WeatherCondition::new(
                "Clouds",
                "overcast clouds",
            )])),
        );
        webhook_router().with_state(WebhookAppState::new(FulfillTurnHandler::new(weather)))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_and_webhook_paths_fulfil_turns() {
        for uri in ["/", "/webhook"] {
            let response = app()
                .oneshot(post_json(
                    uri,
                    json!({ "queryResult": { "intent": { "displayName": "get-agent-name" } } }),
                ))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value: Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(
                value,
                json!({ "fulfillmentMessages": [ { "text": { "text": [ "My name is Dialogflow Go Webhook" ] } } ] })
            );
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_500_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"ERROR: "));
    }

    #[tokio::test]
    async fn health_endpoint_is_mounted() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
