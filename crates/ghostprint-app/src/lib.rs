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

//! One-shot dispatch of ghostprint invocations to a local printer.
//!
//! # Design
//! - A `ghostprint://payload=…/` invocation decodes into a print request,
//!   resolves a target printer against the installed set, fetches the
//!   document over HTTP into the downloads directory, and hands it to the
//!   external print process. Each run either completes or reports exactly
//!   one failure and terminates.
//! - The printer catalog, spooler, and reporter are trait capabilities so
//!   tests drive the pipeline with doubles; the fetcher runs against a
//!   local mock server.
//!
//! Layout: `cli.rs` (flags and environment), `bootstrap.rs` (wiring),
//! `orchestrator.rs` (the pipeline), `error.rs` (failure classification
//! and reports), `host.rs` (the reporting seam).

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod host;
pub mod orchestrator;

pub use bootstrap::run_app;
pub use cli::Cli;
pub use error::{AppResult, FailureReport, PipelineError};
pub use host::{ConsoleReporter, FailureReporter};
pub use orchestrator::{PipelineOutcome, PrintPipeline};
