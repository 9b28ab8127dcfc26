//! Logging configuration and the plain `timestamp - message` line format.

use std::fmt;
use std::path::PathBuf;

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Default diagnostic log file.
pub const DEFAULT_LOG_FILE: &str = "inventory.log";

/// Where diagnostic lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stdout,
    File(PathBuf),
}

/// Line format for diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// `2026-10-19 12:00:00,123 - Added 10 of apple`
    Plain,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub sink: LogSink,
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sink: LogSink::File(PathBuf::from(DEFAULT_LOG_FILE)),
            format: LogFormat::Plain,
            default_filter: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn stdout() -> Self {
        Self {
            sink: LogSink::Stdout,
            ..Self::default()
        }
    }

    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// Event formatter producing `timestamp - message` lines.
///
/// Spans, targets and levels are not rendered.
#[derive(Debug, Clone)]
pub struct PlainFormat {
    timestamp_format: &'static str,
}

impl Default for PlainFormat {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M:%S,%3f",
        }
    }
}

impl<S, N> FormatEvent<S, N> for PlainFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{} - ", Local::now().format(self.timestamp_format))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_writes_plain_lines_to_inventory_log() {
        let cfg = LogConfig::default();
        assert_eq!(cfg.sink, LogSink::File(PathBuf::from("inventory.log")));
        assert_eq!(cfg.format, LogFormat::Plain);
        assert_eq!(cfg.default_filter, "info");
    }

    #[test]
    fn builders_override_fields() {
        let cfg = LogConfig::stdout()
            .with_format(LogFormat::Json)
            .with_default_filter("warn");
        assert_eq!(cfg.sink, LogSink::Stdout);
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.default_filter, "warn");
    }
}
