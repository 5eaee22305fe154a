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

//! Hand-off of stored documents to the external print process.
//!
//! Layout: `spooler.rs` (the [`PrintSpooler`] seam and the Java-backed
//! implementation), `error.rs` (`PrintError`).

pub mod error;
pub mod spooler;

pub use error::PrintError;
pub use spooler::{JavaSpooler, PrintCommand, PrintSpooler, SpoolerConfig};
