//! The one-shot pipeline: decode, resolve, fetch, print.
//!
//! # Design
//! - Stages run strictly in order and short-circuit; nothing later runs
//!   once a stage has failed.
//! - The printer catalog is consulted on every run, including the
//!   default-printer path, so a broken enumeration capability surfaces
//!   immediately.
//! - Failures are reported exactly once, here; stages never report or
//!   terminate on their own.

use ghostprint_fetch::{DocumentFetcher, FetchedDocument};
use ghostprint_payload::decode;
use ghostprint_printers::{PrinterCatalog, resolve};
use ghostprint_spool::{PrintCommand, PrintSpooler};
use tracing::{error, info};

use crate::error::PipelineError;
use crate::host::FailureReporter;

/// Terminal state of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The document reached the print process.
    Completed {
        /// Stored document that was printed.
        document: FetchedDocument,
    },
    /// A stage failed and the failure has been reported.
    Failed {
        /// Exit code for the process.
        exit_code: i32,
    },
}

impl PipelineOutcome {
    /// Exit code to terminate the process with.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Completed { .. } => 0,
            Self::Failed { exit_code } => *exit_code,
        }
    }

    pub(crate) const fn failed(exit_code: i32) -> Self {
        Self::Failed { exit_code }
    }
}

/// One-shot dispatch pipeline over the injected capabilities.
#[derive(Debug)]
pub struct PrintPipeline<C, S, R> {
    catalog: C,
    fetcher: DocumentFetcher,
    spooler: S,
    reporter: R,
}

impl<C, S, R> PrintPipeline<C, S, R>
where
    C: PrinterCatalog,
    S: PrintSpooler,
    R: FailureReporter,
{
    /// Assemble a pipeline from its capabilities.
    #[must_use]
    pub const fn new(catalog: C, fetcher: DocumentFetcher, spooler: S, reporter: R) -> Self {
        Self {
            catalog,
            fetcher,
            spooler,
            reporter,
        }
    }

    /// Run the pipeline once over `raw_invocation`.
    ///
    /// A failure is reported through the reporter exactly once and folded
    /// into the returned outcome; bad input never panics.
    pub async fn run(&self, raw_invocation: &str) -> PipelineOutcome {
        match self.execute(raw_invocation).await {
            Ok(document) => {
                info!(
                    path = %document.local_path.display(),
                    "document dispatched to the printer"
                );
                PipelineOutcome::Completed { document }
            }
            Err(err) => {
                let report = err.report();
                error!(error = ?err, title = report.title, "pipeline stage failed");
                self.reporter.report(&report);
                PipelineOutcome::failed(err.exit_code())
            }
        }
    }

    async fn execute(&self, raw_invocation: &str) -> Result<FetchedDocument, PipelineError> {
        let request = decode(raw_invocation).map_err(PipelineError::decode)?;
        let installed = self
            .catalog
            .installed()
            .await
            .map_err(PipelineError::printer)?;
        let printer =
            resolve(request.printer_name.as_deref(), &installed).map_err(PipelineError::printer)?;
        let document = self
            .fetcher
            .fetch(&request.url, request.method, request.body.as_ref())
            .await
            .map_err(PipelineError::fetch)?;
        let command = PrintCommand {
            pdf_path: document.local_path.clone(),
            printer_name: printer.name,
        };
        self.spooler
            .print(&command)
            .await
            .map_err(PipelineError::print)?;
        Ok(document)
    }
}
