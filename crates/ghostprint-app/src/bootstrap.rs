//! Wiring of the production pipeline from command-line settings.
//!
//! # Design
//! - Everything configurable is resolved here, once; the pipeline runs on
//!   explicit values only.
//! - Failures before the pipeline exists (telemetry, HTTP client) flow
//!   through the same console reporter and fold into a failed outcome, so
//!   `main` stays a straight-line exit-code mapping.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::UserDirs;
use ghostprint_fetch::DocumentFetcher;
use ghostprint_printers::SystemPrinterCatalog;
use ghostprint_spool::{JavaSpooler, SpoolerConfig};
use ghostprint_telemetry::{LogFormat, LoggingConfig, init_logging};
use tracing::debug;

use crate::cli::Cli;
use crate::error::{AppResult, PipelineError};
use crate::host::{ConsoleReporter, FailureReporter};
use crate::orchestrator::{PipelineOutcome, PrintPipeline};

const JAR_RELATIVE: [&str; 4] = [
    "resources",
    "print",
    "app-lib",
    "printpdf-1.0-jar-with-dependencies.jar",
];
#[cfg(windows)]
const JAVA_RELATIVE: [&str; 5] = ["resources", "print", "jre", "bin", "java.exe"];
#[cfg(not(windows))]
const JAVA_RELATIVE: [&str; 5] = ["resources", "print", "jre", "bin", "java"];

/// Run the ghostprint pipeline for the parsed command line.
///
/// Never returns an error: pre-pipeline failures are reported and folded
/// into a failed outcome, exactly like stage failures.
pub async fn run_app(cli: &Cli) -> PipelineOutcome {
    match try_run_app(cli).await {
        Ok(outcome) => outcome,
        Err(err) => {
            ConsoleReporter.report(&err.report());
            PipelineOutcome::failed(err.exit_code())
        }
    }
}

async fn try_run_app(cli: &Cli) -> AppResult<PipelineOutcome> {
    init_telemetry(cli)?;
    let pipeline = build_pipeline(cli)?;
    Ok(pipeline.run(&cli.invocation).await)
}

fn init_telemetry(cli: &Cli) -> AppResult<()> {
    let config = LoggingConfig {
        level: &cli.log_level,
        format: LogFormat::infer(),
    };
    init_logging(&config).map_err(|err| PipelineError::unexpected("telemetry.init", err))
}

fn build_pipeline(
    cli: &Cli,
) -> AppResult<PrintPipeline<SystemPrinterCatalog, JavaSpooler, ConsoleReporter>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.fetch_timeout_secs))
        .build()
        .map_err(|err| PipelineError::unexpected("http_client.build", err))?;
    let fetcher = DocumentFetcher::new(client, resolve_download_dir(cli.download_dir.clone()));
    let spooler_config = resolve_spooler_config(cli)?;
    debug!(
        java = %spooler_config.java_path.display(),
        jar = %spooler_config.jar_path.display(),
        downloads = %fetcher.download_dir().display(),
        "pipeline wiring resolved"
    );
    Ok(PrintPipeline::new(
        SystemPrinterCatalog,
        fetcher,
        JavaSpooler::new(spooler_config),
        ConsoleReporter,
    ))
}

fn resolve_spooler_config(cli: &Cli) -> AppResult<SpoolerConfig> {
    let java_path = match &cli.java_path {
        Some(path) => path.clone(),
        None => default_resource_path(&JAVA_RELATIVE)?,
    };
    let jar_path = match &cli.jar_path {
        Some(path) => path.clone(),
        None => default_resource_path(&JAR_RELATIVE)?,
    };
    Ok(SpoolerConfig {
        java_path,
        jar_path,
        wait: Duration::from_secs(cli.print_timeout_secs),
    })
}

fn resolve_download_dir(configured: Option<PathBuf>) -> PathBuf {
    configured.unwrap_or_else(|| {
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(env::temp_dir)
    })
}

fn default_resource_path(relative: &[&str]) -> AppResult<PathBuf> {
    let exe = env::current_exe()
        .map_err(|err| PipelineError::unexpected("current_exe.resolve", err))?;
    let mut path = exe.parent().map_or_else(PathBuf::new, Path::to_path_buf);
    for part in relative {
        path.push(part);
    }
    Ok(path)
}
