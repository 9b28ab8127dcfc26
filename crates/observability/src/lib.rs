//! Tracing and logging (shared setup).

use std::path::PathBuf;

use thiserror::Error;

/// Initialize process-wide observability from a [`LogConfig`].
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init_with(config: &LogConfig) -> Result<(), ObservabilityError> {
    tracing::init_with(config)
}

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Logging configuration and line formats.
pub mod logging;

pub use logging::{LogConfig, LogFormat, LogSink, PlainFormat, DEFAULT_LOG_FILE};
pub use tracing::plain_subscriber;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("failed to open log file {path:?}: {source}")]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
