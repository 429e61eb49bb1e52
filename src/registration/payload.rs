//! Registration request body.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Settings;

/// Body of `POST /v1/automations/executor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub config: PayloadConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executor: Option<String>,
    pub signature: String,
    pub chain_id: u64,
    pub timestamp: u64,
    pub executor_metadata: PayloadMetadata,
}

/// Token, fee and routing settings of the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadConfig {
    pub input_tokens: Vec<String>,
    pub hop_addresses: Vec<String>,
    #[serde(rename = "feeInBPS")]
    pub fee_in_bps: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_receiver: Option<String>,
    pub limit_per_execution: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadMetadata {
    /// The executor's client id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub metadata: AddressTags,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressTags {
    pub address_tags: Map<String, Value>,
}

impl RegistrationPayload {
    /// Build an unsigned payload (empty signature, zero timestamp).
    pub fn from_settings(settings: &Settings) -> Self {
        let executor = &settings.executor;
        Self {
            config: PayloadConfig {
                input_tokens: executor.input_tokens.clone(),
                hop_addresses: executor.hop_addresses.clone(),
                fee_in_bps: executor.fee_in_bps,
                fee_token: executor.fee_token.clone(),
                fee_receiver: executor.fee_receiver.clone(),
                limit_per_execution: executor.limit_per_execution,
            },
            executor: executor.executor.clone(),
            signature: String::new(),
            chain_id: executor.chain_id,
            timestamp: 0,
            executor_metadata: PayloadMetadata {
                id: executor.client_id.clone(),
                name: settings.metadata.name.clone(),
                logo: settings.metadata.logo.clone(),
                metadata: AddressTags {
                    address_tags: settings.metadata.address_tags.clone(),
                },
            },
        }
    }

    /// Attach the signature and the timestamp that was signed.
    pub fn with_signature(mut self, signature: String, timestamp: u64) -> Self {
        self.signature = signature;
        self.timestamp = timestamp;
        self
    }
}
