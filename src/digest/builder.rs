//! Builds the executor registration digest and its safe-message wrapper.

use alloy::primitives::{hex, Address, B256};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::{ExecutorConfig, Settings};
use crate::digest::hasher::{Eip712Hasher, TypedDataHasher};
use crate::digest::types::{DigestError, DigestResult, Domain, Schema};

/// Output of the `generate` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReport {
    /// Timestamp baked into the digest; `submit` must be given the same value.
    pub timestamp: u64,
    /// `RegisterExecutor` digest.
    pub data_hash: String,
    /// Digest actually signed by the executor wallet.
    pub safe_message_hash: String,
    /// Key-manager command that produces the signature.
    pub cmd: String,
}

/// Digest construction on top of a [`TypedDataHasher`].
#[derive(Debug, Clone, Default)]
pub struct DigestBuilder<H = Eip712Hasher> {
    hasher: H,
}

impl DigestBuilder<Eip712Hasher> {
    pub fn new() -> Self {
        Self::with_hasher(Eip712Hasher)
    }
}

impl<H: TypedDataHasher> DigestBuilder<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Hash of the `RegisterExecutor` message under a chain-id-only domain.
    pub fn executor_digest(&self, config: &ExecutorConfig) -> DigestResult<B256> {
        self.executor_digest_with_schema(config, &Schema::register_executor())
    }

    /// Same as [`Self::executor_digest`] against an explicit schema.
    pub fn executor_digest_with_schema(
        &self,
        config: &ExecutorConfig,
        schema: &Schema,
    ) -> DigestResult<B256> {
        let domain = Domain::chain(config.chain_id);
        let values = executor_message(config);

        tracing::debug!(
            schema = %schema.encode_type(),
            domain = ?domain,
            message = %values,
            "Hashing executor registration"
        );

        self.hasher.hash(&domain, schema, &values)
    }

    /// Wrap `message` as a `SafeMessage` under the safe's own domain.
    pub fn safe_message_digest(
        &self,
        message: &[u8],
        chain_id: u64,
        safe: Address,
    ) -> DigestResult<B256> {
        let domain = Domain::contract(chain_id, safe);
        let values = json!({ "message": hex::encode_prefixed(message) });
        self.hasher.hash(&domain, &Schema::safe_message(), &values)
    }

    /// Compute both digests and the signing command for `settings`.
    pub fn generate(&self, settings: &Settings) -> DigestResult<GenerateReport> {
        let config = &settings.executor;
        let data_hash = self.executor_digest(config)?;

        let executor = config
            .executor
            .as_deref()
            .ok_or(DigestError::MissingValue("executor"))?;
        let safe = executor
            .parse::<Address>()
            .map_err(|e| DigestError::InvalidAddress {
                value: executor.to_string(),
                reason: e.to_string(),
            })?;

        let safe_message_hash = self.safe_message_digest(data_hash.as_slice(), config.chain_id, safe)?;
        let safe_message_hash = hex::encode_prefixed(safe_message_hash);

        tracing::info!(
            chain_id = config.chain_id,
            executor = %executor,
            timestamp = config.timestamp,
            "Executor digest generated"
        );

        Ok(GenerateReport {
            timestamp: config.timestamp,
            data_hash: hex::encode_prefixed(data_hash),
            cmd: signing_command(&settings.key_manager_path, executor, &safe_message_hash),
            safe_message_hash,
        })
    }
}

/// Values of the `RegisterExecutor` message, keyed by schema field name.
pub fn executor_message(config: &ExecutorConfig) -> Value {
    json!({
        "timestamp": config.timestamp,
        "executor": config.executor,
        "inputTokens": config.input_tokens,
        "hopAddresses": config.hop_addresses,
        "feeInBPS": config.fee_in_bps,
        "feeToken": config.fee_token,
        "feeReceiver": config.fee_receiver,
        "limitPerExecution": config.limit_per_execution,
        "clientId": config.client_id,
    })
}

fn signing_command(key_manager_path: &str, executor: &str, hash: &str) -> String {
    format!(
        "vault write {}/sign address='{}' hash='{}'",
        key_manager_path.trim_end_matches('/'),
        executor,
        hash
    )
}
