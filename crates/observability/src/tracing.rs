//! Tracing/logging initialization.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::ObservabilityError;
use crate::logging::{LogConfig, LogFormat, LogSink, PlainFormat};

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initialize tracing/logging from an explicit configuration.
///
/// The log file is opened in append mode and created if missing. Once a global
/// subscriber is installed, later calls are no-ops.
pub fn init_with(config: &LogConfig) -> Result<(), ObservabilityError> {
    let writer = match &config.sink {
        LogSink::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ObservabilityError::OpenLogFile {
                    path: path.clone(),
                    source,
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    let filter = env_filter(&config.default_filter);

    let _ = match config.format {
        LogFormat::Plain => {
            ::tracing::subscriber::set_global_default(plain_subscriber(writer, filter))
        }
        LogFormat::Json => ::tracing::subscriber::set_global_default(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .with_timer(tracing_subscriber::fmt::time::SystemTime)
                .with_target(false)
                .with_writer(writer)
                .finish(),
        ),
    };

    Ok(())
}

/// Build (without installing) a subscriber that writes `timestamp - message`
/// lines to `writer`.
///
/// Useful for scoping diagnostics with `tracing::subscriber::with_default`.
pub fn plain_subscriber<W>(writer: W, filter: EnvFilter) -> impl ::tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .event_format(PlainFormat::default())
        .with_writer(writer)
        .finish()
}
