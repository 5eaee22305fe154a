//! Error types for telemetry installation.

use thiserror::Error;

/// Failures raised while installing the logging stack.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed.
    #[error("failed to install the tracing subscriber")]
    SubscriberInstall {
        /// Underlying installation failure.
        source: tracing_subscriber::util::TryInitError,
    },
}
