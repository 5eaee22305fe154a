//! Subscriber construction and installation.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt, registry};

use crate::error::TelemetryError;

/// Default filter directive applied when nothing else specifies one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Output encoding for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Machine-readable JSON lines.
    Json,
    /// Human-oriented plain text.
    Pretty,
}

impl LogFormat {
    /// Pick the format suited to the build profile.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Settings for [`init_logging`].
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig<'a> {
    /// Filter directive used when the environment provides none.
    pub level: &'a str,
    /// Line encoding.
    pub format: LogFormat,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
        }
    }
}

/// Install the global tracing subscriber.
///
/// The filter honours `RUST_LOG` when set and falls back to the configured
/// level otherwise.
///
/// # Errors
///
/// Returns [`TelemetryError::SubscriberInstall`] when a global subscriber
/// has already been installed.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<(), TelemetryError> {
    let filter = build_env_filter(config.level);
    let result = match config.format {
        LogFormat::Json => registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_thread_ids(false),
            )
            .try_init(),
        LogFormat::Pretty => registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init(),
    };
    result.map_err(|source| TelemetryError::SubscriberInstall { source })
}

fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_info_level() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_infer_the_pretty_format() {
        assert_eq!(LogFormat::infer(), LogFormat::Pretty);
    }

    #[test]
    fn second_install_is_rejected() {
        let config = LoggingConfig {
            level: "debug",
            format: LogFormat::Pretty,
        };
        let _ = init_logging(&config);
        let second = init_logging(&config);
        assert!(matches!(
            second,
            Err(TelemetryError::SubscriberInstall { .. })
        ));
    }
}
