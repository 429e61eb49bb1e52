//! Executor registration toolkit.
//!
//! Builds the EIP-712 digest for an executor registration, normalizes the
//! externally produced signature and submits the signed registration to the
//! automation API.

pub mod config;
pub mod digest;
pub mod observability;
pub mod registration;
pub mod signature;

pub use config::Settings;
pub use digest::DigestBuilder;
pub use registration::{SubmitOutcome, Submitter};
