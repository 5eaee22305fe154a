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

//! Binary entry point for the ghostprint dispatcher.

use std::process;

use clap::Parser;
use ghostprint_app::{Cli, run_app};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let outcome = run_app(&cli).await;
    let code = outcome.exit_code();
    if code != 0 {
        process::exit(code);
    }
}
