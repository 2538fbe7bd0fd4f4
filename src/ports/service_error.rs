//! Errors shared by all external service ports.

use thiserror::Error;

/// Failure talking to an external HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Connection or transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The outbound call exceeded its client timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// API key rejected by the provider.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Provider answered successfully but with nothing usable.
    #[error("empty result: {0}")]
    EmptyResult(String),
}

impl ServiceError {
    pub fn network(message: impl Into<String>) -> Self {
        ServiceError::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ServiceError::Parse(message.into())
    }

    pub fn empty(message: impl Into<String>) -> Self {
        ServiceError::EmptyResult(message.into())
    }
}
