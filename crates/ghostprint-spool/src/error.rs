//! Error types for the print hand-off.
//!
//! # Design
//! - Every variant carries the path of the document that was being printed,
//!   so callers can name the file in user-facing reports.
//! - Process-launch failures keep the offending program path and the
//!   originating `io::Error`.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Failures raised while handing a stored document to the print process.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The document to print was not found on disk.
    #[error("print input file does not exist")]
    MissingInput {
        /// Path that failed the existence check.
        path: PathBuf,
    },
    /// The print process could not be started or waited on.
    #[error("failed to launch the print process")]
    Launch {
        /// Document that was being printed.
        path: PathBuf,
        /// Executable that failed to run.
        program: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The print process ran but reported failure.
    #[error("print process reported failure")]
    ExitStatus {
        /// Document that was being printed.
        path: PathBuf,
        /// Exit code, when the process was not killed by a signal.
        code: Option<i32>,
    },
    /// The print process did not finish within the configured wait.
    #[error("print process timed out")]
    Timeout {
        /// Document that was being printed.
        path: PathBuf,
        /// How long the process was given.
        wait: Duration,
    },
}

impl PrintError {
    /// Path of the document the failed print run was working on.
    #[must_use]
    pub fn document_path(&self) -> &Path {
        match self {
            Self::MissingInput { path }
            | Self::Launch { path, .. }
            | Self::ExitStatus { path, .. }
            | Self::Timeout { path, .. } => path,
        }
    }
}
