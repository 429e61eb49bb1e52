//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config / digest / registration
//!     → tracing events with structured fields
//!     → logging.rs subscriber (EnvFilter, stderr)
//! ```
//!
//! # Design Decisions
//! - Logs go to stderr; stdout is reserved for command output
//! - Log level configurable via `RUST_LOG`

pub mod logging;

pub use logging::init_logging;
