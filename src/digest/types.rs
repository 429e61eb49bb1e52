//! Typed-data domain, schema and error definitions.

use alloy::primitives::Address;
use serde::Serialize;
use thiserror::Error;

/// Primary type of the executor registration message.
pub const REGISTER_EXECUTOR: &str = "RegisterExecutor";

/// Primary type of the safe-message wrapper.
pub const SAFE_MESSAGE: &str = "SafeMessage";

/// EIP-712 domain. Only the fields that are set take part in the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    pub chain_id: u64,
    pub verifying_contract: Option<Address>,
}

impl Domain {
    /// Domain carrying only a chain id.
    pub fn chain(chain_id: u64) -> Self {
        Self {
            chain_id,
            verifying_contract: None,
        }
    }

    /// Domain bound to a verifying contract on a chain.
    pub fn contract(chain_id: u64, verifying_contract: Address) -> Self {
        Self {
            chain_id,
            verifying_contract: Some(verifying_contract),
        }
    }
}

/// A named, typed schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedField {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl TypedField {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// Ordered field list for one primary type. Field order is part of the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub primary_type: String,
    pub fields: Vec<TypedField>,
}

impl Schema {
    pub fn new(primary_type: impl Into<String>, fields: Vec<TypedField>) -> Self {
        Self {
            primary_type: primary_type.into(),
            fields,
        }
    }

    /// The `RegisterExecutor` schema the registration API verifies against.
    pub fn register_executor() -> Self {
        Self::new(
            REGISTER_EXECUTOR,
            vec![
                TypedField::new("timestamp", "uint256"),
                TypedField::new("executor", "address"),
                TypedField::new("inputTokens", "address[]"),
                TypedField::new("hopAddresses", "address[]"),
                TypedField::new("feeInBPS", "uint256"),
                TypedField::new("feeToken", "address"),
                TypedField::new("feeReceiver", "address"),
                TypedField::new("limitPerExecution", "bool"),
                TypedField::new("clientId", "string"),
            ],
        )
    }

    /// `SafeMessage(bytes message)`, the wallet's off-chain message wrapper.
    pub fn safe_message() -> Self {
        Self::new(SAFE_MESSAGE, vec![TypedField::new("message", "bytes")])
    }

    /// Canonical type string, e.g. `SafeMessage(bytes message)`.
    pub fn encode_type(&self) -> String {
        let fields: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{} {}", f.kind, f.name))
            .collect();
        format!("{}({})", self.primary_type, fields.join(","))
    }
}

/// Errors raised while building a digest.
#[derive(Debug, Error)]
pub enum DigestError {
    /// An address could not be parsed.
    #[error("invalid address `{value}`: {reason}")]
    InvalidAddress { value: String, reason: String },

    /// A required value was not configured.
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),

    /// The hashing primitive rejected the typed data.
    #[error("typed data encoding failed: {0}")]
    Encoding(String),
}

/// Result type for digest operations.
pub type DigestResult<T> = Result<T, DigestError>;
