//! Configuration schema definitions.
//!
//! Everything the registrar needs is read once from the environment into
//! these types and handed to each operation by reference.

use serde::Serialize;
use serde_json::{Map, Value};

/// Default key-manager path used when building the signing command.
pub const DEFAULT_KEY_MANAGER_PATH: &str = "ethereum/key-managers/brahma-builder";

/// Root configuration for one registrar invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Values that make up the signed `RegisterExecutor` message.
    pub executor: ExecutorConfig,

    /// Display metadata sent alongside the registration.
    pub metadata: ExecutorMetadata,

    /// Registration API base URL. Only `submit` requires it.
    pub api_base_url: Option<String>,

    /// Key-manager path the signing command is written against.
    pub key_manager_path: String,
}

/// Executor registration parameters.
///
/// Addresses are kept as the strings found in the environment; they are
/// parsed by the hashing primitive, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorConfig {
    /// Milliseconds since the Unix epoch, captured at process start.
    pub timestamp: u64,

    /// Chain the executor registers on.
    pub chain_id: u64,

    /// Executor address.
    pub executor: Option<String>,

    /// Tokens the executor accepts as input.
    pub input_tokens: Vec<String>,

    /// Intermediate addresses the executor routes through.
    pub hop_addresses: Vec<String>,

    /// Fee in basis points (10_000 = 100%).
    #[serde(rename = "feeInBPS")]
    pub fee_in_bps: u64,

    pub fee_token: Option<String>,

    pub fee_receiver: Option<String>,

    /// Limit the executor to one run per execution.
    pub limit_per_execution: bool,

    pub client_id: Option<String>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timestamp: 0,
            chain_id: 1,
            executor: None,
            input_tokens: Vec::new(),
            hop_addresses: Vec::new(),
            fee_in_bps: 0,
            fee_token: None,
            fee_receiver: None,
            limit_per_execution: false,
            client_id: None,
        }
    }
}

/// Display metadata attached to the registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutorMetadata {
    pub name: Option<String>,

    pub logo: Option<String>,

    /// Free-form address to label mapping.
    pub address_tags: Map<String, Value>,
}
