//! Error types for printer enumeration and resolution.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while enumerating or resolving printers.
#[derive(Debug, Error)]
pub enum PrinterError {
    /// The requested printer is not installed.
    #[error("printer not found")]
    NotFound {
        /// Printer name carried by the request.
        requested: String,
    },
    /// The platform printer listing command could not be launched.
    #[error("printer listing command failed to launch")]
    Spawn {
        /// Command that failed to start.
        program: &'static str,
        /// Underlying IO error.
        source: io::Error,
    },
    /// The platform printer listing command exited unsuccessfully.
    #[error("printer listing command exited unsuccessfully")]
    CommandStatus {
        /// Command that failed.
        program: &'static str,
        /// Exit code when one was available.
        code: Option<i32>,
    },
    /// The platform printer listing output could not be decoded.
    #[error("printer listing output was not valid utf-8")]
    OutputEncoding {
        /// Command that produced the output.
        program: &'static str,
        /// Underlying conversion error.
        source: FromUtf8Error,
    },
}

impl PrinterError {
    /// `true` when the failure came from the enumeration capability rather
    /// than from name resolution.
    #[must_use]
    pub const fn is_enumeration(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}
