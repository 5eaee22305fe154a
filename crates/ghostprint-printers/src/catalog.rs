//! The printer enumeration capability.
//!
//! # Design
//! - Enumeration is an async capability so the orchestrator can await it and
//!   tests can substitute canned catalogs.
//! - The production implementation shells out to the platform's listing
//!   command and treats every launch, exit, and decoding problem as an
//!   enumeration failure.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::PrinterError;
use crate::model::PrinterDescriptor;

/// Capability that reports the printers installed on the host.
#[async_trait]
pub trait PrinterCatalog: Send + Sync {
    /// Enumerate the installed printers at the time of the call.
    async fn installed(&self) -> Result<Vec<PrinterDescriptor>, PrinterError>;
}

/// Catalog backed by the platform's printer listing command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPrinterCatalog;

#[cfg(target_os = "windows")]
const LIST_PROGRAM: &str = "powershell";
#[cfg(target_os = "windows")]
const LIST_ARGS: &[&str] = &["-NoProfile", "-Command", "(Get-Printer).Name"];

#[cfg(not(target_os = "windows"))]
const LIST_PROGRAM: &str = "lpstat";
#[cfg(not(target_os = "windows"))]
const LIST_ARGS: &[&str] = &["-e"];

#[async_trait]
impl PrinterCatalog for SystemPrinterCatalog {
    async fn installed(&self) -> Result<Vec<PrinterDescriptor>, PrinterError> {
        let output = Command::new(LIST_PROGRAM)
            .args(LIST_ARGS)
            .output()
            .await
            .map_err(|source| PrinterError::Spawn {
                program: LIST_PROGRAM,
                source,
            })?;

        if !output.status.success() {
            return Err(PrinterError::CommandStatus {
                program: LIST_PROGRAM,
                code: output.status.code(),
            });
        }

        let listing = String::from_utf8(output.stdout).map_err(|source| {
            PrinterError::OutputEncoding {
                program: LIST_PROGRAM,
                source,
            }
        })?;
        let printers = parse_listing(&listing);
        debug!(count = printers.len(), "enumerated installed printers");
        Ok(printers)
    }
}

/// One printer name per line; blank lines and surrounding whitespace are
/// tolerated so CRLF output parses the same as LF output.
fn parse_listing(listing: &str) -> Vec<PrinterDescriptor> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PrinterDescriptor::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_listing_reads_one_name_per_line() {
        let printers = parse_listing("HP-1\nCopy Room\nFront Desk HP\n");
        assert_eq!(
            printers,
            vec![
                PrinterDescriptor::new("HP-1"),
                PrinterDescriptor::new("Copy Room"),
                PrinterDescriptor::new("Front Desk HP"),
            ]
        );
    }

    #[test]
    fn parse_listing_tolerates_crlf_and_blank_lines() {
        let printers = parse_listing("HP-1\r\n\r\n  HP-2  \r\n");
        assert_eq!(
            printers,
            vec![PrinterDescriptor::new("HP-1"), PrinterDescriptor::new("HP-2")]
        );
    }

    #[test]
    fn parse_listing_handles_empty_output() {
        assert!(parse_listing("").is_empty());
        assert!(parse_listing("\n\n").is_empty());
    }

    #[tokio::test]
    async fn system_catalog_failures_surface_as_enumeration_errors() {
        // The listing command may or may not exist on the test host; both
        // outcomes have to stay within the enumeration contract.
        match SystemPrinterCatalog.installed().await {
            Ok(printers) => {
                for printer in printers {
                    assert!(!printer.name.is_empty());
                }
            }
            Err(err) => assert!(err.is_enumeration()),
        }
    }
}
