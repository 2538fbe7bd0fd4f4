//! Helpers shared by the reqwest-backed service adapters.

use reqwest::{Client, Response};
use std::time::Duration;

use crate::ports::ServiceError;

/// Builds an HTTP client with the per-call timeout applied.
pub(crate) fn build_client(timeout: Duration) -> Result<Client, ServiceError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ServiceError::network(format!("Failed to create HTTP client: {}", e)))
}

/// Maps a transport failure onto the port error.
pub(crate) fn send_error(err: reqwest::Error, timeout: Duration) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Timeout {
            timeout_secs: timeout.as_secs(),
        }
    } else if err.is_connect() {
        ServiceError::network(format!("Connection failed: {}", err))
    } else {
        ServiceError::network(err.to_string())
    }
}

/// Passes successful responses through and turns the rest into errors.
pub(crate) async fn check_status(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    match status.as_u16() {
        401 | 403 => Err(ServiceError::AuthenticationFailed),
        code => Err(ServiceError::Status { status: code, body }),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;
    use tokio::net::TcpListener;

    /// Serves `router` on an ephemeral local port and returns its base URL.
    pub async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
