//! Signature handling.
//!
//! Signatures arrive as 0x-prefixed hex produced by an external signer. Some
//! signers encode the recovery id as 0/1; the registration API expects the
//! Ethereum 27/28 form.

pub mod normalize;

pub use normalize::{normalize_signature, SignatureError, SIGNATURE_HEX_LEN};
