//! Recovery-id normalization.

use thiserror::Error;

/// Length of a 0x-prefixed 65-byte signature.
pub const SIGNATURE_HEX_LEN: usize = 132;

/// Offset added to a 0/1 recovery id.
const RECOVERY_ID_OFFSET: u8 = 27;

/// Errors raised while validating a signature string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid signature length: expected {expected} characters (66 bytes), got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid recovery id `{0}`: not a hex byte")]
    InvalidRecoveryId(String),
}

/// Rewrite a trailing 0/1 recovery id as 27/28.
///
/// Any other trailing value, including 27 and 28, is passed through.
pub fn normalize_signature(signature: &str) -> Result<String, SignatureError> {
    if signature.len() != SIGNATURE_HEX_LEN {
        return Err(SignatureError::InvalidLength {
            expected: SIGNATURE_HEX_LEN,
            actual: signature.len(),
        });
    }

    let split = SIGNATURE_HEX_LEN - 2;
    let (body, tail) = match (signature.get(..split), signature.get(split..)) {
        (Some(body), Some(tail)) => (body, tail),
        _ => return Err(SignatureError::InvalidRecoveryId(signature.to_string())),
    };

    let v = u8::from_str_radix(tail, 16)
        .map_err(|_| SignatureError::InvalidRecoveryId(tail.to_string()))?;

    match v {
        0 | 1 => {
            let adjusted = v + RECOVERY_ID_OFFSET;
            tracing::debug!(from = v, to = adjusted, "Adjusted signature recovery id");
            Ok(format!("{body}{adjusted:02x}"))
        }
        _ => Ok(signature.to_string()),
    }
}
