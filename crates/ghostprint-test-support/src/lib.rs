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

//! Shared fixtures and doubles for Ghostprint tests.
//!
//! Layout: `catalogs.rs` (canned printer catalogs), `fixtures.rs` (on-disk
//! documents and scripted executables), `invocations.rs` (invocation-string
//! builders).

pub mod catalogs;
pub mod fixtures;
pub mod invocations;

pub use catalogs::{FailingCatalog, StaticCatalog};
pub use fixtures::sample_document;
#[cfg(unix)]
pub use fixtures::{ScriptedExecutable, scripted_executable, sleeping_executable};
pub use invocations::invocation_for;
