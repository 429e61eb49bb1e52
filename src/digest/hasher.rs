//! Structured-data hashing primitive.
//!
//! The builder only ever talks to [`TypedDataHasher`]; the production
//! implementation hands the typed data to alloy's EIP-712 encoder.

use alloy::dyn_abi::TypedData;
use alloy::primitives::{B256, U256};
use alloy::sol_types::Eip712Domain;
use serde_json::{json, Map, Value};

use crate::digest::types::{DigestError, DigestResult, Domain, Schema};

/// Computes the signing hash of a typed value under a domain.
pub trait TypedDataHasher {
    fn hash(&self, domain: &Domain, schema: &Schema, values: &Value) -> DigestResult<B256>;
}

/// EIP-712 hasher backed by `alloy::dyn_abi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Eip712Hasher;

impl Eip712Hasher {
    /// Assemble the full typed-data document for a single primary type.
    fn typed_data(domain: &Domain, schema: &Schema, values: &Value) -> DigestResult<TypedData> {
        let domain = Eip712Domain::new(
            None,
            None,
            Some(U256::from(domain.chain_id)),
            domain.verifying_contract,
            None,
        );

        let fields = serde_json::to_value(&schema.fields)
            .map_err(|e| DigestError::Encoding(e.to_string()))?;
        let mut types = Map::new();
        types.insert(schema.primary_type.clone(), fields);

        let domain = serde_json::to_value(&domain).map_err(|e| DigestError::Encoding(e.to_string()))?;

        let document = json!({
            "types": types,
            "primaryType": schema.primary_type,
            "domain": domain,
            "message": values,
        });

        serde_json::from_value(document).map_err(|e| DigestError::Encoding(e.to_string()))
    }
}

impl TypedDataHasher for Eip712Hasher {
    fn hash(&self, domain: &Domain, schema: &Schema, values: &Value) -> DigestResult<B256> {
        let typed = Self::typed_data(domain, schema, values)?;
        typed
            .eip712_signing_hash()
            .map_err(|e| DigestError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256, hex, keccak256, Address};

    const SAFE: Address = address!("0xAbC0000000000000000000000000000000000001");

    fn word(value: u64) -> [u8; 32] {
        U256::from(value).to_be_bytes::<32>()
    }

    #[test]
    fn test_safe_message_type_hashes() {
        assert_eq!(
            keccak256(Schema::safe_message().encode_type()),
            b256!("0x60b3cbf8b4a223d68d641b3b6ddf9a298e7f33710cf3d3a9d1146b5a6150fbca")
        );
        assert_eq!(
            keccak256("EIP712Domain(uint256 chainId,address verifyingContract)"),
            b256!("0x47e79534a245952e8b16893a336b85a3d9ea9fa8c573f3d803afb92a79469218")
        );
    }

    #[test]
    fn test_safe_message_hash_matches_manual_encoding() {
        let message = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");
        let domain = Domain::contract(1, SAFE);
        let values = json!({ "message": hex::encode_prefixed(message) });

        let hash = Eip712Hasher
            .hash(&domain, &Schema::safe_message(), &values)
            .unwrap();

        let mut separator = Vec::new();
        separator.extend_from_slice(
            keccak256("EIP712Domain(uint256 chainId,address verifyingContract)").as_slice(),
        );
        separator.extend_from_slice(&word(1));
        separator.extend_from_slice(SAFE.into_word().as_slice());
        let separator = keccak256(&separator);

        let mut struct_data = Vec::new();
        struct_data.extend_from_slice(keccak256("SafeMessage(bytes message)").as_slice());
        struct_data.extend_from_slice(keccak256(message.as_slice()).as_slice());
        let struct_hash = keccak256(&struct_data);

        let mut digest = vec![0x19, 0x01];
        digest.extend_from_slice(separator.as_slice());
        digest.extend_from_slice(struct_hash.as_slice());

        assert_eq!(hash, keccak256(&digest));
    }

    #[test]
    fn test_chain_only_domain_separator() {
        let schema = Schema::new("Ping", vec![crate::digest::types::TypedField::new("n", "uint256")]);
        let hash = Eip712Hasher
            .hash(&Domain::chain(5), &schema, &json!({ "n": 7 }))
            .unwrap();

        let mut separator = Vec::new();
        separator.extend_from_slice(keccak256("EIP712Domain(uint256 chainId)").as_slice());
        separator.extend_from_slice(&word(5));
        let separator = keccak256(&separator);

        let mut struct_data = Vec::new();
        struct_data.extend_from_slice(keccak256("Ping(uint256 n)").as_slice());
        struct_data.extend_from_slice(&word(7));
        let struct_hash = keccak256(&struct_data);

        let mut digest = vec![0x19, 0x01];
        digest.extend_from_slice(separator.as_slice());
        digest.extend_from_slice(struct_hash.as_slice());

        assert_eq!(hash, keccak256(&digest));
    }

    #[test]
    fn test_missing_value_is_encoding_error() {
        let result = Eip712Hasher.hash(&Domain::chain(1), &Schema::safe_message(), &json!({}));
        assert!(matches!(result, Err(DigestError::Encoding(_))));
    }

    #[test]
    fn test_malformed_address_is_encoding_error() {
        let schema = Schema::new("Owner", vec![crate::digest::types::TypedField::new("who", "address")]);
        let result = Eip712Hasher.hash(&Domain::chain(1), &schema, &json!({ "who": "0xnope" }));
        assert!(matches!(result, Err(DigestError::Encoding(_))));
    }
}
