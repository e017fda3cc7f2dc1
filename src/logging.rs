//! Logging configuration and initialization.
//!
//! Log lines go to an append-only file and read
//! `<timestamp> - <LEVEL> - <message>`. The subscriber is built explicitly and
//! installed once by the binary; library code only emits `tracing` events.

use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Local;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, Error, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Append-only log file.
    pub file: PathBuf,
}

impl LoggingConfig {
    /// Build a subscriber that appends to the configured file.
    pub fn subscriber(&self) -> Result<impl Subscriber + Send + Sync + 'static> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file)
            .map_err(|source| ConfigError::LogFile {
                path: self.file.display().to_string(),
                source,
            })?;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => level_filter(&self.level).map_err(|reason| ConfigError::InvalidValue {
                field: "logging.level",
                reason,
            })?,
        };

        Ok(build(filter, Mutex::new(file)))
    }

    /// Install the file subscriber as the process-wide default.
    pub fn init(&self) -> Result<()> {
        let subscriber = self.subscriber()?;
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| Error::Io(std::io::Error::other(e.to_string())))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            file: PathBuf::from("trading_bot.log"),
        }
    }
}

/// Parse a level directive such as `info` or `warn,tradebot=debug`.
///
/// A lone word must be a level name. `EnvFilter` would otherwise read it as a
/// target that matches nothing and the log file would stay empty.
pub fn level_filter(level: &str) -> std::result::Result<EnvFilter, String> {
    for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let bare = !directive.contains('=') && !directive.contains('[');
        if bare && directive.parse::<LevelFilter>().is_err() {
            return Err(format!("'{directive}' is not a log level"));
        }
    }
    EnvFilter::try_new(level).map_err(|e| e.to_string())
}

/// Build a subscriber with the log line layout writing to `writer`.
pub fn subscriber_with_writer<W>(level: &str, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    build(EnvFilter::new(level), writer)
}

fn build<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .event_format(LineFormat)
        .finish()
}

/// Formats one event as `<timestamp> - <LEVEL> - <message> [fields]`.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
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
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        write!(writer, "{timestamp} - {} - ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
