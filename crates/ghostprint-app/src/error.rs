//! Pipeline failure classification and operator-facing reporting.
//!
//! # Design
//! - One variant per pipeline stage, each wrapping the stage's own error
//!   type; the variant alone decides the process exit code.
//! - [`PipelineError::report`] renders the dialog text operators have been
//!   trained on; the wording must not drift casually.

use ghostprint_fetch::FetchError;
use ghostprint_payload::DecodeError;
use ghostprint_printers::PrinterError;
use ghostprint_spool::PrintError;
use thiserror::Error;

/// Convenience alias for fallible app operations.
pub type AppResult<T> = Result<T, PipelineError>;

/// A failed pipeline run, classified by the stage that raised it.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The invocation string was rejected by the payload codec.
    #[error("invocation decoding failed")]
    Decode {
        /// Underlying decode failure.
        source: DecodeError,
    },
    /// Printer enumeration or resolution failed.
    #[error("printer resolution failed")]
    Printer {
        /// Underlying printer failure.
        source: PrinterError,
    },
    /// The document could not be retrieved or stored.
    #[error("document fetch failed")]
    Fetch {
        /// Underlying fetch failure.
        source: FetchError,
    },
    /// The stored document could not be printed.
    #[error("document print failed")]
    Print {
        /// Underlying print failure.
        source: PrintError,
    },
    /// A failure outside the pipeline stages.
    #[error("unexpected failure")]
    Unexpected {
        /// What was being attempted.
        operation: &'static str,
        /// Underlying failure.
        source: anyhow::Error,
    },
}

impl PipelineError {
    pub(crate) const fn decode(source: DecodeError) -> Self {
        Self::Decode { source }
    }

    pub(crate) const fn printer(source: PrinterError) -> Self {
        Self::Printer { source }
    }

    pub(crate) const fn fetch(source: FetchError) -> Self {
        Self::Fetch { source }
    }

    pub(crate) const fn print(source: PrintError) -> Self {
        Self::Print { source }
    }

    pub(crate) fn unexpected(operation: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Unexpected {
            operation,
            source: source.into(),
        }
    }

    /// Process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Decode { .. } => 2,
            Self::Printer { source } => {
                if source.is_enumeration() {
                    1
                } else {
                    3
                }
            }
            Self::Fetch { .. } => 4,
            Self::Print { .. } => 5,
            Self::Unexpected { .. } => 1,
        }
    }

    /// Operator-facing report for this failure.
    #[must_use]
    pub fn report(&self) -> FailureReport {
        match self {
            Self::Decode { source } => FailureReport::new("Invalid Request", source.to_string()),
            Self::Printer { source } => match source {
                PrinterError::NotFound { requested } => FailureReport::new(
                    "Printer Not Found",
                    format!("Printer {requested} is not found"),
                ),
                other => FailureReport::new("No Printer found", other.to_string()),
            },
            Self::Fetch { source } => {
                if source.is_write() {
                    FailureReport::new(
                        "File Write Error",
                        "There was an error while writing the PDF file.",
                    )
                } else {
                    FailureReport::new(
                        "Download Error",
                        "There was an error while downloading the PDF file.",
                    )
                }
            }
            Self::Print { source } => match source {
                PrintError::MissingInput { path } => FailureReport::new(
                    "Print Error",
                    format!("The specified PDF file {} does not exist.", path.display()),
                ),
                other => FailureReport::new(
                    "Print Error",
                    format!(
                        "There was an error while printing the PDF {}.",
                        other.document_path().display()
                    ),
                ),
            },
            Self::Unexpected { source, .. } => FailureReport::new("Error", format!("{source:#}")),
        }
    }
}

/// Title and message pair shown to the operator when a run fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    /// Short dialog title.
    pub title: &'static str,
    /// Full dialog message.
    pub message: String,
}

impl FailureReport {
    pub(crate) fn new(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }
}
