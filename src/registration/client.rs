//! HTTP transport for the registration API.

use std::future::Future;

use serde_json::Value;
use thiserror::Error;

/// Raw response from the registration API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Errors raised before a response was received.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),
}

/// Minimal JSON POST interface.
pub trait RegistrationTransport {
    fn post(
        &self,
        url: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl RegistrationTransport for HttpTransport {
    async fn post(&self, url: &str, body: &Value) -> Result<ApiResponse, TransportError> {
        let res = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        tracing::debug!(url = %url, status = status, "Registration API responded");

        Ok(ApiResponse { status, body })
    }
}
