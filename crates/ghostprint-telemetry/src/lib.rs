//! Logging bootstrap for Ghostprint binaries.
//!
//! Layout: `init.rs` (subscriber construction and installation), `error.rs`
//! (`TelemetryError`).

mod error;
mod init;

pub use error::TelemetryError;
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
