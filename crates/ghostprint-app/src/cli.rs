//! Command-line surface of the ghostprint binary.
//!
//! Every setting resolves flag first, then environment variable, then
//! default; the parsed values flow into explicit config structs at
//! bootstrap and nothing reads ambient globals after startup.

use std::path::PathBuf;

use clap::Parser;

/// Seconds a document fetch may take before the request is abandoned.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 300;

/// Seconds a print run may take before the process is killed.
pub const DEFAULT_PRINT_TIMEOUT_SECS: u64 = 120;

/// Dispatch a ghostprint invocation to a local printer.
#[derive(Debug, Parser)]
#[command(name = "ghostprint", version, about)]
pub struct Cli {
    /// The ghostprint:// invocation string, exactly as handed over by the
    /// operating system.
    pub invocation: String,

    /// Java launcher used for the print application.
    #[arg(long, env = "GHOSTPRINT_JAVA_PATH")]
    pub java_path: Option<PathBuf>,

    /// Print application archive handed to -jar.
    #[arg(long, env = "GHOSTPRINT_JAR_PATH")]
    pub jar_path: Option<PathBuf>,

    /// Directory receiving fetched documents.
    #[arg(long, env = "GHOSTPRINT_DOWNLOAD_DIR")]
    pub download_dir: Option<PathBuf>,

    /// Seconds a document fetch may take.
    #[arg(
        long,
        env = "GHOSTPRINT_FETCH_TIMEOUT_SECS",
        default_value_t = DEFAULT_FETCH_TIMEOUT_SECS
    )]
    pub fetch_timeout_secs: u64,

    /// Seconds a print run may take.
    #[arg(
        long,
        env = "GHOSTPRINT_PRINT_TIMEOUT_SECS",
        default_value_t = DEFAULT_PRINT_TIMEOUT_SECS
    )]
    pub print_timeout_secs: u64,

    /// Log filter directive applied when RUST_LOG is unset.
    #[arg(long, env = "GHOSTPRINT_LOG", default_value = ghostprint_telemetry::DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn the_invocation_is_required() {
        let result = Cli::try_parse_from(["ghostprint"]);
        assert!(result.is_err());
    }

    #[test]
    fn defaults_apply_when_only_the_invocation_is_given() {
        let cli = Cli::try_parse_from(["ghostprint", "ghostprint://payload=%7B%7D/"])
            .expect("a bare invocation parses");
        assert_eq!(cli.invocation, "ghostprint://payload=%7B%7D/");
        assert_eq!(cli.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
        assert_eq!(cli.print_timeout_secs, DEFAULT_PRINT_TIMEOUT_SECS);
        assert_eq!(cli.log_level, "info");
        assert!(cli.java_path.is_none());
        assert!(cli.jar_path.is_none());
        assert!(cli.download_dir.is_none());
    }

    #[test]
    fn flags_override_the_defaults() {
        let cli = Cli::try_parse_from([
            "ghostprint",
            "--download-dir",
            "/srv/ghostprint/downloads",
            "--fetch-timeout-secs",
            "10",
            "--log-level",
            "debug",
            "ghostprint://payload=%7B%7D/",
        ])
        .expect("a flagged invocation parses");
        assert_eq!(
            cli.download_dir.as_deref(),
            Some(Path::new("/srv/ghostprint/downloads"))
        );
        assert_eq!(cli.fetch_timeout_secs, 10);
        assert_eq!(cli.log_level, "debug");
    }
}
