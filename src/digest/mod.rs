//! Structured-data digest subsystem.
//!
//! # Data Flow
//! ```text
//! Settings.executor
//!     → builder.rs (domain + RegisterExecutor schema + values)
//!     → hasher.rs (EIP-712 signing hash)
//!     → data hash
//!     → builder.rs (SafeMessage wrapper under the executor's domain)
//!     → GenerateReport (hashes + signing command)
//! ```
//!
//! # Design Decisions
//! - Hashing sits behind `TypedDataHasher` so the builder can be tested with a fake
//! - Schema field order is fixed; it is part of the hash input
//! - No address validation beyond what the hasher performs

pub mod builder;
pub mod hasher;
pub mod types;

pub use builder::{DigestBuilder, GenerateReport};
pub use hasher::{Eip712Hasher, TypedDataHasher};
pub use types::{DigestError, Domain, Schema, TypedField};
