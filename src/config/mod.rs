//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (optional) + process environment
//!     → loader.rs (hydrate, read, parse)
//!     → Settings (immutable)
//!     → passed by reference to generate / submit
//! ```
//!
//! # Design Decisions
//! - Config is read once at process start; nothing is global
//! - Unset values fall back to the same defaults the registration API expects
//! - Only the submit path requires the API base URL

pub mod loader;
pub mod schema;

pub use loader::{unix_millis, ConfigError};
pub use schema::{ExecutorConfig, ExecutorMetadata, Settings};
