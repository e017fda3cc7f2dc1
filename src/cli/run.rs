//! Process-level wiring: config, logging, client, then one order flow.

use tracing::debug;

use crate::cli::prompt::{self, Prompter};
use crate::cli::{output, place, Cli, PlaceArgs};
use crate::config::Config;
use crate::error::Result;
use crate::exchange::{OrderReceipt, SimulatedClient};
use crate::service::OrderService;

/// Execute the CLI.
///
/// Only startup failures (config, log file) are returned; the order flow
/// reports its own errors.
pub async fn execute(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json));
    cli.color.apply();

    let config = cli.load_config()?;
    config.logging.init()?;
    debug!(
        log_file = %config.logging.file.display(),
        latency_ms = config.client.latency_ms,
        "tradebot starting"
    );

    if !cli.no_header {
        output::header(env!("CARGO_PKG_VERSION"));
    }

    let mut prompter = prompt::stdin_prompter(cli.json);
    place_order(&config, prompter.as_mut(), &cli.place_args()).await;

    debug!("tradebot stopped");
    Ok(())
}

/// Build a fresh service from `config` and run one order flow.
pub async fn place_order<P: Prompter + ?Sized>(
    config: &Config,
    prompter: &mut P,
    args: &PlaceArgs,
) -> Option<OrderReceipt> {
    let service = OrderService::new(SimulatedClient::new(config.client.latency()));
    place::execute(&service, prompter, args).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::LinePrompter;
    use crate::domain::OrderStatus;
    use crate::testkit;
    use std::io::Cursor;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn place_order_uses_configured_latency() {
        let mut config = testkit::config::fast_config();
        config.client.latency_ms = 40;
        let mut prompter =
            LinePrompter::new(Cursor::new("BTCUSDT\nbuy\nmarket\n1\n"), Vec::new());

        let started = Instant::now();
        let receipt = place_order(&config, &mut prompter, &PlaceArgs::default()).await;

        assert_eq!(receipt.unwrap().status, OrderStatus::Filled);
        assert!(started.elapsed() >= Duration::from_millis(40));
    }
}
