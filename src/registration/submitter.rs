//! Signed registration submission.

use thiserror::Error;

use crate::config::{ConfigError, Settings};
use crate::registration::client::{HttpTransport, RegistrationTransport};
use crate::registration::payload::RegistrationPayload;
use crate::signature::{normalize_signature, SignatureError};

/// Path of the executor registration endpoint, relative to the API base URL.
pub const REGISTER_EXECUTOR_PATH: &str = "/v1/automations/executor";

/// Errors that abort a submission before any request is sent.
#[derive(Debug, Error)]
pub enum RegistrarError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// What the registration API made of the submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx response.
    Registered { body: String },
    /// The API answered with a non-success status.
    Rejected { status: u16, body: String },
    /// No response was received.
    Failed { message: String },
}

/// Sends one signed registration per call. Never retries.
#[derive(Debug, Clone, Default)]
pub struct Submitter<T = HttpTransport> {
    transport: T,
}

impl<T: RegistrationTransport> Submitter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Normalize `signature`, attach it with `timestamp` and POST the payload.
    ///
    /// Validation and configuration problems are returned as errors before
    /// any network activity. API and transport failures come back as a
    /// [`SubmitOutcome`].
    pub async fn submit(
        &self,
        settings: &Settings,
        signature: &str,
        timestamp: u64,
    ) -> Result<SubmitOutcome, RegistrarError> {
        let payload = self.prepare(settings, signature, timestamp)?;
        self.send(settings, &payload).await
    }

    /// Build the signed payload. Fails on a malformed signature.
    pub fn prepare(
        &self,
        settings: &Settings,
        signature: &str,
        timestamp: u64,
    ) -> Result<RegistrationPayload, RegistrarError> {
        let signature = normalize_signature(signature)?;
        Ok(RegistrationPayload::from_settings(settings).with_signature(signature, timestamp))
    }

    /// POST a prepared payload once. Fails without sending when the base URL
    /// is unset or invalid.
    pub async fn send(
        &self,
        settings: &Settings,
        payload: &RegistrationPayload,
    ) -> Result<SubmitOutcome, RegistrarError> {
        let base_url = settings.require_api_base_url()?;
        let url = endpoint(base_url);
        let body = serde_json::to_value(payload)?;

        tracing::info!(
            url = %url,
            chain_id = payload.chain_id,
            executor = ?payload.executor,
            timestamp = payload.timestamp,
            "Submitting executor registration"
        );

        let outcome = match self.transport.post(&url, &body).await {
            Ok(res) if res.is_success() => SubmitOutcome::Registered { body: res.body },
            Ok(res) => {
                tracing::warn!(status = res.status, "Registration rejected");
                SubmitOutcome::Rejected {
                    status: res.status,
                    body: res.body,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Registration request failed");
                SubmitOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        Ok(outcome)
    }
}

/// Full registration URL for `base_url`.
pub fn endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), REGISTER_EXECUTOR_PATH)
}
