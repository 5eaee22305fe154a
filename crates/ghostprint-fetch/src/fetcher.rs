//! Streaming document retrieval.
//!
//! # Design
//! - The destination path is fixed before the request is issued; a fresh
//!   UUID per call keeps concurrent invocations collision free.
//! - Response bodies stream to disk chunk by chunk; nothing is buffered
//!   whole in memory.
//! - The destination file is only created after the response status has been
//!   accepted, so a rejected download leaves nothing behind.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use ghostprint_payload::RequestMethod;
use serde_json::Value;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::FetchError;

/// File extension applied to every fetched document.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// A document persisted to local storage, ready for printing.
///
/// Owned exclusively by the pipeline instance that created it; the path is
/// never reused across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    /// Path of the stored file.
    pub local_path: PathBuf,
}

/// Streams remote documents into a local downloads directory.
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    client: reqwest::Client,
    download_dir: PathBuf,
}

impl DocumentFetcher {
    /// Build a fetcher over an existing client and destination directory.
    ///
    /// Request bounds (timeouts, TLS) live on the client, which the caller
    /// constructs once at startup.
    #[must_use]
    pub fn new(client: reqwest::Client, download_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            download_dir: download_dir.into(),
        }
    }

    /// Directory receiving fetched documents.
    #[must_use]
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Retrieve `url` and stream the response body into a freshly named
    /// local file.
    ///
    /// The body, when present, is forwarded for GET as well as POST: a JSON
    /// string goes out verbatim as the raw request body, any other JSON
    /// value is re-serialized and sent with a JSON content type.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request cannot be completed, the
    /// server answers with a non-success status, or the local write fails.
    pub async fn fetch(
        &self,
        url: &str,
        method: RequestMethod,
        body: Option<&Value>,
    ) -> Result<FetchedDocument, FetchError> {
        let destination = self.next_document_path();
        debug!(
            url,
            method = method.as_str(),
            path = %destination.display(),
            "starting document fetch"
        );

        let response = self
            .build_request(url, method, body)
            .send()
            .await
            .map_err(|source| FetchError::Download {
                url: url.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut file = File::create(&destination)
            .await
            .map_err(|source| FetchError::Write {
                path: destination.clone(),
                source,
            })?;
        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| FetchError::Download {
                url: url.to_string(),
                source,
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|source| FetchError::Write {
                    path: destination.clone(),
                    source,
                })?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(|source| FetchError::Write {
            path: destination.clone(),
            source,
        })?;

        info!(path = %destination.display(), bytes = written, "document stored");
        Ok(FetchedDocument {
            local_path: destination,
        })
    }

    fn build_request(
        &self,
        url: &str,
        method: RequestMethod,
        body: Option<&Value>,
    ) -> reqwest::RequestBuilder {
        let request = match method {
            RequestMethod::Get => self.client.get(url),
            RequestMethod::Post => self.client.post(url),
        };
        match body {
            Some(Value::String(text)) => request.body(text.clone()),
            Some(value) => request.json(value),
            None => request,
        }
    }

    fn next_document_path(&self) -> PathBuf {
        self.download_dir
            .join(format!("{}.{DOCUMENT_EXTENSION}", Uuid::new_v4()))
    }
}
