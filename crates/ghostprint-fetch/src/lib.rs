#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Streaming retrieval of remote documents into local storage.
//!
//! Layout: `fetcher.rs` (`DocumentFetcher` and the stored-document model),
//! `error.rs` (`FetchError`).

pub mod error;
pub mod fetcher;

pub use error::FetchError;
pub use fetcher::{DOCUMENT_EXTENSION, DocumentFetcher, FetchedDocument};
