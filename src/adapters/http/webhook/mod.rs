//! Webhook HTTP adapter - The dialog platform's fulfillment endpoint.
//!
//! Provides endpoints for:
//! - Fulfilling a conversation turn
//! - Liveness checks

pub mod handlers;
pub mod routes;

pub use handlers::{WebhookAppState, WebhookError};
pub use routes::webhook_router;
