//! Executor registration subsystem.
//!
//! # Data Flow
//! ```text
//! --signature, --timestamp
//!     → signature::normalize (length check, 0/1 → 27/28)
//!     → payload.rs (Settings → RegistrationPayload)
//!     → submitter.rs (base URL check, one POST)
//!     → client.rs (reqwest)
//!     → SubmitOutcome (registered / rejected / failed)
//! ```
//!
//! # Design Decisions
//! - Exactly one request per invocation, no retries
//! - Nothing is sent unless the signature and base URL are valid
//! - Upstream failures are reported, not raised

pub mod client;
pub mod payload;
pub mod submitter;

pub use client::{ApiResponse, HttpTransport, RegistrationTransport, TransportError};
pub use payload::RegistrationPayload;
pub use submitter::{endpoint, RegistrarError, SubmitOutcome, Submitter};
