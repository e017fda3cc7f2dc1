//! CLI output formatting.
//!
//! Human-readable output by default, or one JSON object per line when JSON
//! mode is on. Errors always go to stderr.

use std::fmt::Display;
use std::future::Future;
use std::sync::{OnceLock, RwLock};
use std::time::Duration;

use owo_colors::{OwoColorize, Stream};
use serde_json::json;

use crate::error::Result;
use crate::exchange::OrderReceipt;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool) -> Self {
        Self { json }
    }
}

/// Global output configuration singleton.
static OUTPUT_CONFIG: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn config_cell() -> &'static RwLock<OutputConfig> {
    OUTPUT_CONFIG.get_or_init(|| RwLock::new(OutputConfig::default()))
}

fn read_config() -> OutputConfig {
    match config_cell().read() {
        Ok(config) => *config,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

fn write_config(config: OutputConfig) {
    match config_cell().write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Emit a JSON line with type and payload structure.
fn emit_json_line(kind: &str, payload: serde_json::Value) {
    println!(
        "{}",
        json!({
            "type": kind,
            "payload": payload,
        })
    );
}

/// Apply output settings from global CLI flags.
pub fn configure(config: OutputConfig) {
    write_config(config);
}

#[must_use]
pub fn is_json() -> bool {
    read_config().json
}

/// Print the application header with name and version.
pub fn header(version: &str) {
    if is_json() {
        emit_json_line(
            "header",
            json!({
                "app": "tradebot",
                "version": version,
            }),
        );
        return;
    }

    println!(
        "{} {}",
        "tradebot".if_supports_color(Stream::Stdout, |t| t.bold()),
        version.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

/// Print a section header.
pub fn section(title: &str) {
    if is_json() {
        return;
    }

    println!();
    println!("{}", title.if_supports_color(Stream::Stdout, |t| t.bold()));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let value = value.to_string();
    if is_json() {
        emit_json_line(
            "field",
            json!({
                "label": label,
                "value": value,
            }),
        );
        return;
    }

    let label = format!("{label}:");
    println!(
        "  {:<10} {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}

/// Print the outcome of a filled order.
pub fn receipt(receipt: &OrderReceipt) -> Result<()> {
    if is_json() {
        emit_json_line("order", serde_json::to_value(receipt)?);
        return Ok(());
    }

    section("Order Result");
    for (label, value) in receipt.fields() {
        field(label, value);
    }
    Ok(())
}

/// Print an error line.
pub fn error(message: &str) {
    if is_json() {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!(
        "{}",
        message.if_supports_color(Stream::Stderr, |t| t.red())
    );
}

/// Braille spinner animation frames.
const BRAILLE_SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner redraw interval.
const SPINNER_TICK: Duration = Duration::from_millis(80);

/// Create a progress spinner.
///
/// Returns a hidden progress bar in JSON mode. The spinner does not tick on
/// its own; see [`with_spinner`].
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    if is_json() {
        let pb = indicatif::ProgressBar::hidden();
        pb.set_message(message.to_string());
        return pb;
    }

    let pb = indicatif::ProgressBar::new_spinner();
    if let Ok(style) = indicatif::ProgressStyle::default_spinner()
        .tick_strings(BRAILLE_SPINNER)
        .template("  {spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Await `work` while a spinner with `message` animates, then clear it.
///
/// Ticks are driven from the awaiting task, so no extra thread is started.
pub async fn with_spinner<F: Future>(message: &str, work: F) -> F::Output {
    let pb = spinner(message);
    let mut ticker = tokio::time::interval(SPINNER_TICK);
    tokio::pin!(work);

    let output = loop {
        tokio::select! {
            output = &mut work => break output,
            _ = ticker.tick() => pb.tick(),
        }
    };

    spinner_clear(&pb);
    output
}

/// Finish a spinner, leaving no trace on screen.
pub fn spinner_clear(pb: &indicatif::ProgressBar) {
    pb.finish_and_clear();
}
