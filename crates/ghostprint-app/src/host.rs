//! The reporting seam between the pipeline and the operator.

use crate::error::FailureReport;

/// Where failed runs are surfaced.
///
/// The production implementation writes to the console; tests capture the
/// reports instead.
pub trait FailureReporter: Send + Sync {
    /// Surface one failure to the operator.
    fn report(&self, report: &FailureReport);
}

/// Reporter that writes to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl FailureReporter for ConsoleReporter {
    fn report(&self, report: &FailureReport) {
        eprintln!("{}: {}", report.title, report.message);
    }
}
