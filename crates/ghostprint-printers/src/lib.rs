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

//! Printer enumeration and name resolution.
//!
//! Layout: `model.rs` (descriptors and resolution results), `resolver.rs`
//! (exact-match resolution), `catalog.rs` (the enumeration capability and
//! its platform-command implementation), `error.rs` (`PrinterError`).

pub mod catalog;
pub mod error;
pub mod model;
pub mod resolver;

pub use catalog::{PrinterCatalog, SystemPrinterCatalog};
pub use error::PrinterError;
pub use model::{PrinterDescriptor, ResolvedPrinter};
pub use resolver::resolve;
