//! HTTP handlers for the webhook endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::application::handlers::fulfillment::{decode_request, encode_response};
use crate::application::{FulfillTurnHandler, FulfillmentError};

/// Application state for the webhook endpoint.
#[derive(Clone)]
pub struct WebhookAppState {
    pub fulfillment: Arc<FulfillTurnHandler>,
}

impl WebhookAppState {
    pub fn new(fulfillment: FulfillTurnHandler) -> Self {
        Self {
            fulfillment: Arc::new(fulfillment),
        }
    }
}

/// Fulfil one conversation turn.
///
/// POST / (and POST /webhook)
///
/// The body is taken raw so that malformed JSON is reported through the
/// same `ERROR: ...` channel as every other failure.
pub async fn fulfill_turn(State(state): State<WebhookAppState>, body: Bytes) -> Response {
    match run_turn(&state, &body).await {
        Ok(encoded) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            encoded,
        )
            .into_response(),
        Err(err) => WebhookError(err).into_response(),
    }
}

async fn run_turn(state: &WebhookAppState, body: &[u8]) -> Result<Vec<u8>, FulfillmentError> {
    let request = decode_request(body)?;
    tracing::info!(
        session = %request.session,
        response_id = %request.response_id,
        intent = request.intent_name(),
        city = request.city(),
        "webhook request"
    );

    let response = state.fulfillment.handle(&request).await?;
    tracing::info!(
        response_id = %request.response_id,
        text = response.first_text().unwrap_or_default(),
        "webhook response"
    );

    encode_response(&response)
}

/// Liveness probe.
///
/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// A failed turn, rendered as `500` with body `ERROR: {cause}`.
#[derive(Debug)]
pub struct WebhookError(pub FulfillmentError);

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "turn failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("ERROR: {}", self.0),
        )
            .into_response()
    }
}
