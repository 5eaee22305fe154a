//! Error types for document retrieval.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while retrieving a document.
///
/// Download failures and local write failures stay distinguishable so the
/// operator report can name the right defect, even though both abort the
/// pipeline the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the response body could not be read.
    #[error("document download failed")]
    Download {
        /// URL used for the request.
        url: String,
        /// Underlying HTTP client error.
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("document download returned a non-success status")]
    Status {
        /// URL used for the request.
        url: String,
        /// HTTP status code returned by the server.
        status: u16,
    },
    /// Writing the document to local storage failed.
    #[error("document write failed")]
    Write {
        /// Destination path of the (possibly partial) file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

impl FetchError {
    /// `true` when the failure happened while persisting bytes locally
    /// rather than while downloading them.
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failures_are_classified_as_writes() {
        let err = FetchError::Write {
            path: PathBuf::from("/downloads/doc.pdf"),
            source: io::Error::other("disk full"),
        };
        assert!(err.is_write());
    }

    #[test]
    fn status_failures_are_classified_as_downloads() {
        let err = FetchError::Status {
            url: "https://example.test/doc".to_string(),
            status: 502,
        };
        assert!(!err.is_write());
    }
}
