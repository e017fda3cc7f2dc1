//! Command-line interface definitions.
//!
//! Without a subcommand the bot prompts for every order field. `place`
//! accepts the same fields as flags and only prompts for the ones left out.

pub mod output;
pub mod place;
pub mod prompt;
pub mod run;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Simplified trading bot: validate an order and submit it to a simulated exchange
#[derive(Parser, Debug)]
#[command(name = "tradebot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file [default: tradebot.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the log file path
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Override log level (debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Override the simulated exchange latency, in milliseconds
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    /// Skip the header line
    #[arg(long, global = true)]
    pub no_header: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Apply this choice to all `owo-colors` output.
    pub fn apply(self) {
        match self {
            Self::Auto => owo_colors::unset_override(),
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Place one order from flags, prompting only for missing fields
    Place(PlaceArgs),
}

/// Order fields as raw text. Validation happens in the order flow so that
/// bad values are reported like prompt input.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceArgs {
    /// Instrument symbol, e.g. BTCUSDT
    #[arg(long)]
    pub symbol: Option<String>,

    /// BUY or SELL
    #[arg(long)]
    pub side: Option<String>,

    /// MARKET or LIMIT
    #[arg(long = "type", value_name = "TYPE")]
    pub order_type: Option<String>,

    /// Quantity in units of the instrument
    #[arg(long)]
    pub quantity: Option<String>,

    /// Limit price (LIMIT orders only)
    #[arg(long)]
    pub price: Option<String>,
}

impl Cli {
    /// Resolve the config file and apply flag overrides on top.
    pub fn load_config(&self) -> crate::error::Result<Config> {
        let mut config = Config::resolve(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref file) = self.log_file {
            config.logging.file = file.clone();
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(latency_ms) = self.latency_ms {
            config.client.latency_ms = latency_ms;
        }
    }

    /// Fields supplied up front; empty when running fully interactive.
    #[must_use]
    pub fn place_args(&self) -> PlaceArgs {
        match &self.command {
            Some(Commands::Place(args)) => args.clone(),
            None => PlaceArgs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "tradebot");
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["tradebot"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.place_args(), PlaceArgs::default());
        assert!(!cli.json);
        assert!(matches!(cli.color, ColorChoice::Auto));
    }

    #[test]
    fn test_parse_place_flags() {
        let cli = Cli::try_parse_from([
            "tradebot",
            "place",
            "--symbol",
            "ETHUSDT",
            "--side",
            "sell",
            "--type",
            "limit",
            "--quantity",
            "2.5",
            "--price",
            "3000.0",
        ])
        .unwrap();

        let args = cli.place_args();
        assert_eq!(args.symbol.as_deref(), Some("ETHUSDT"));
        assert_eq!(args.side.as_deref(), Some("sell"));
        assert_eq!(args.order_type.as_deref(), Some("limit"));
        assert_eq!(args.quantity.as_deref(), Some("2.5"));
        assert_eq!(args.price.as_deref(), Some("3000.0"));
    }

    #[test]
    fn test_quantity_is_not_parsed_by_clap() {
        let cli = Cli::try_parse_from(["tradebot", "place", "--quantity", "lots"]).unwrap();
        assert_eq!(cli.place_args().quantity.as_deref(), Some("lots"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tradebot", "place", "--json", "--latency-ms", "0"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.latency_ms, Some(0));
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::try_parse_from([
            "tradebot",
            "--log-file",
            "/tmp/x.log",
            "--log-level",
            "debug",
            "--latency-ms",
            "10",
        ])
        .unwrap();

        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.logging.file, PathBuf::from("/tmp/x.log"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.client.latency_ms, 10);
    }

    #[test]
    fn test_log_level_override_is_validated() {
        let cli = Cli::try_parse_from(["tradebot", "--log-level", "verbose"]).unwrap();
        let err = cli.load_config().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
        assert!(err.to_string().contains("logging.level"));
    }
}
