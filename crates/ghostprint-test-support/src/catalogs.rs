//! Canned printer catalogs.

use async_trait::async_trait;
use ghostprint_printers::{PrinterCatalog, PrinterDescriptor, PrinterError};

/// Catalog answering with a fixed set of printer names.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    printers: Vec<PrinterDescriptor>,
}

impl StaticCatalog {
    /// Build a catalog over the given printer names.
    #[must_use]
    pub fn new(names: &[&str]) -> Self {
        Self {
            printers: names.iter().map(|name| PrinterDescriptor::new(*name)).collect(),
        }
    }
}

#[async_trait]
impl PrinterCatalog for StaticCatalog {
    async fn installed(&self) -> Result<Vec<PrinterDescriptor>, PrinterError> {
        Ok(self.printers.clone())
    }
}

/// Catalog whose enumeration always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCatalog;

#[async_trait]
impl PrinterCatalog for FailingCatalog {
    async fn installed(&self) -> Result<Vec<PrinterDescriptor>, PrinterError> {
        Err(PrinterError::CommandStatus {
            program: "lpstat",
            code: Some(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_catalogs_answer_with_their_names() {
        let catalog = StaticCatalog::new(&["Front Desk", "Archive"]);
        let printers = catalog.installed().await.expect("a static catalog cannot fail");
        let names: Vec<&str> = printers.iter().map(|printer| printer.name.as_str()).collect();
        assert_eq!(names, vec!["Front Desk", "Archive"]);
    }

    #[tokio::test]
    async fn failing_catalogs_raise_enumeration_errors() {
        let err = FailingCatalog
            .installed()
            .await
            .expect_err("a failing catalog cannot succeed");
        assert!(err.is_enumeration());
    }
}
