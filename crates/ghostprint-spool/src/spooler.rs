//! The print process seam and its Java-backed implementation.
//!
//! # Design
//! - [`PrintSpooler`] is the narrow interface the pipeline depends on;
//!   [`JavaSpooler`] shells out to the bundled print application.
//! - The document must exist on disk before a launch is attempted.
//! - The printer name travels wrapped in literal double quotes; the print
//!   application strips them itself.
//! - A run that exceeds the configured wait is killed and reported as a
//!   timeout.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::PrintError;

/// A single print run: the stored document plus the optional target printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintCommand {
    /// Stored document to hand to the print process.
    pub pdf_path: PathBuf,
    /// Exact printer name, or `None` for the system default.
    pub printer_name: Option<String>,
}

/// Locations and bounds for the external print process.
#[derive(Debug, Clone)]
pub struct SpoolerConfig {
    /// Java launcher executable.
    pub java_path: PathBuf,
    /// Print application archive handed to `-jar`.
    pub jar_path: PathBuf,
    /// Longest a single print run may take before it is killed.
    pub wait: Duration,
}

/// Hands stored documents to the platform print machinery.
#[async_trait]
pub trait PrintSpooler: Send + Sync {
    /// Print one stored document.
    ///
    /// # Errors
    ///
    /// Returns [`PrintError`] when the document is missing, the process
    /// cannot be launched, exits unsuccessfully, or overruns its wait.
    async fn print(&self, command: &PrintCommand) -> Result<(), PrintError>;
}

/// Production spooler that launches the bundled Java print application.
#[derive(Debug, Clone)]
pub struct JavaSpooler {
    config: SpoolerConfig,
}

impl JavaSpooler {
    /// Build a spooler over the given process configuration.
    #[must_use]
    pub const fn new(config: SpoolerConfig) -> Self {
        Self { config }
    }

    fn arguments(&self, command: &PrintCommand) -> Vec<OsString> {
        let mut arguments = vec![
            OsString::from("-jar"),
            self.config.jar_path.clone().into_os_string(),
            OsString::from("-path"),
            command.pdf_path.clone().into_os_string(),
        ];
        if let Some(printer) = &command.printer_name {
            arguments.push(OsString::from("-printer"));
            arguments.push(OsString::from(format!("\"{printer}\"")));
        }
        arguments
    }
}

#[async_trait]
impl PrintSpooler for JavaSpooler {
    async fn print(&self, command: &PrintCommand) -> Result<(), PrintError> {
        if !matches!(tokio::fs::try_exists(&command.pdf_path).await, Ok(true)) {
            return Err(PrintError::MissingInput {
                path: command.pdf_path.clone(),
            });
        }

        debug!(
            program = %self.config.java_path.display(),
            document = %command.pdf_path.display(),
            printer = ?command.printer_name,
            "launching print process"
        );
        let mut child = Command::new(&self.config.java_path)
            .args(self.arguments(command))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| PrintError::Launch {
                path: command.pdf_path.clone(),
                program: self.config.java_path.clone(),
                source,
            })?;

        let status = match tokio::time::timeout(self.config.wait, child.wait()).await {
            Ok(Ok(status)) => status,
            Ok(Err(source)) => {
                return Err(PrintError::Launch {
                    path: command.pdf_path.clone(),
                    program: self.config.java_path.clone(),
                    source,
                });
            }
            Err(_) => {
                let _ = child.kill().await;
                return Err(PrintError::Timeout {
                    path: command.pdf_path.clone(),
                    wait: self.config.wait,
                });
            }
        };
        if !status.success() {
            return Err(PrintError::ExitStatus {
                path: command.pdf_path.clone(),
                code: status.code(),
            });
        }
        info!(document = %command.pdf_path.display(), "print process finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(java_path: PathBuf, wait: Duration) -> SpoolerConfig {
        SpoolerConfig {
            java_path,
            jar_path: PathBuf::from("/opt/ghostprint/printpdf.jar"),
            wait,
        }
    }

    #[test]
    fn arguments_follow_the_jar_path_printer_order() {
        let spooler = JavaSpooler::new(config_with(PathBuf::from("java"), Duration::from_secs(5)));
        let command = PrintCommand {
            pdf_path: PathBuf::from("/downloads/doc.pdf"),
            printer_name: Some("Front Desk".to_string()),
        };
        let expected: Vec<OsString> = [
            "-jar",
            "/opt/ghostprint/printpdf.jar",
            "-path",
            "/downloads/doc.pdf",
            "-printer",
            "\"Front Desk\"",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        assert_eq!(spooler.arguments(&command), expected);
    }

    #[test]
    fn arguments_omit_the_printer_flag_for_the_system_default() {
        let spooler = JavaSpooler::new(config_with(PathBuf::from("java"), Duration::from_secs(5)));
        let command = PrintCommand {
            pdf_path: PathBuf::from("/downloads/doc.pdf"),
            printer_name: None,
        };
        let arguments = spooler.arguments(&command);
        assert_eq!(arguments.len(), 4);
        assert!(!arguments.iter().any(|argument| argument == "-printer"));
    }

    #[tokio::test]
    async fn print_refuses_a_missing_document() {
        let spooler = JavaSpooler::new(config_with(PathBuf::from("java"), Duration::from_secs(5)));
        let command = PrintCommand {
            pdf_path: PathBuf::from("/definitely/not/here.pdf"),
            printer_name: None,
        };
        let err = spooler
            .print(&command)
            .await
            .expect_err("a missing document must fail");
        assert!(matches!(err, PrintError::MissingInput { .. }));
        assert_eq!(err.document_path(), PathBuf::from("/definitely/not/here.pdf"));
    }

    #[tokio::test]
    async fn print_reports_an_unlaunchable_program() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let document = dir.path().join("doc.pdf");
        tokio::fs::write(&document, b"%PDF-1.4").await?;
        let spooler = JavaSpooler::new(config_with(
            dir.path().join("missing-java"),
            Duration::from_secs(5),
        ));
        let command = PrintCommand {
            pdf_path: document,
            printer_name: None,
        };
        let err = spooler
            .print(&command)
            .await
            .expect_err("the program does not exist");
        assert!(matches!(err, PrintError::Launch { .. }));
        Ok(())
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use ghostprint_test_support::{sample_document, scripted_executable, sleeping_executable};

        #[tokio::test]
        async fn print_runs_the_executable_with_the_expected_argv() -> anyhow::Result<()> {
            let dir = tempfile::tempdir()?;
            let document = sample_document(dir.path())?;
            let script = scripted_executable(0)?;
            let spooler = JavaSpooler::new(config_with(
                script.program().to_path_buf(),
                Duration::from_secs(5),
            ));
            let command = PrintCommand {
                pdf_path: document.clone(),
                printer_name: Some("Office".to_string()),
            };
            spooler.print(&command).await?;

            let recorded = script.recorded_args()?;
            assert_eq!(
                recorded,
                vec![
                    "-jar".to_string(),
                    "/opt/ghostprint/printpdf.jar".to_string(),
                    "-path".to_string(),
                    document.display().to_string(),
                    "-printer".to_string(),
                    "\"Office\"".to_string(),
                ]
            );
            Ok(())
        }

        #[tokio::test]
        async fn print_surfaces_a_failing_exit_code() -> anyhow::Result<()> {
            let dir = tempfile::tempdir()?;
            let document = sample_document(dir.path())?;
            let script = scripted_executable(3)?;
            let spooler = JavaSpooler::new(config_with(
                script.program().to_path_buf(),
                Duration::from_secs(5),
            ));
            let command = PrintCommand {
                pdf_path: document,
                printer_name: None,
            };
            let err = spooler
                .print(&command)
                .await
                .expect_err("the process exits with 3");
            assert!(matches!(err, PrintError::ExitStatus { code: Some(3), .. }));
            Ok(())
        }

        #[tokio::test]
        async fn missing_documents_never_launch_the_process() -> anyhow::Result<()> {
            let dir = tempfile::tempdir()?;
            let script = scripted_executable(0)?;
            let spooler = JavaSpooler::new(config_with(
                script.program().to_path_buf(),
                Duration::from_secs(5),
            ));
            let command = PrintCommand {
                pdf_path: dir.path().join("never-written.pdf"),
                printer_name: None,
            };
            let err = spooler
                .print(&command)
                .await
                .expect_err("the document was never written");
            assert!(matches!(err, PrintError::MissingInput { .. }));
            assert!(!script.ran());
            Ok(())
        }

        #[tokio::test]
        async fn print_kills_a_process_that_overruns_its_wait() -> anyhow::Result<()> {
            let dir = tempfile::tempdir()?;
            let document = sample_document(dir.path())?;
            let script = sleeping_executable(5)?;
            let spooler = JavaSpooler::new(config_with(
                script.program().to_path_buf(),
                Duration::from_millis(100),
            ));
            let command = PrintCommand {
                pdf_path: document,
                printer_name: None,
            };
            let err = spooler
                .print(&command)
                .await
                .expect_err("the process sleeps past the wait");
            let PrintError::Timeout { wait, .. } = err else {
                anyhow::bail!("expected a timeout, got {err:?}");
            };
            assert_eq!(wait, Duration::from_millis(100));
            Ok(())
        }
    }
}
