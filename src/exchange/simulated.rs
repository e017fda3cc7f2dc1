//! Simulated execution client.
//!
//! Stands in for a real exchange endpoint: every order is accepted, waits out
//! a fixed latency, and comes back fully filled. No network I/O.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use super::traits::{OrderClient, OrderReceipt};
use crate::domain::Order;
use crate::error::Error;

/// Round-trip the simulated exchange takes unless configured otherwise.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Deterministic client that fills every order after `latency`.
#[derive(Debug, Clone)]
pub struct SimulatedClient {
    latency: Duration,
}

impl SimulatedClient {
    pub fn new(latency: Duration) -> Self {
        debug!(?latency, "Simulated client initialized");
        Self { latency }
    }

    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedClient {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl OrderClient for SimulatedClient {
    async fn place_order(&self, mut order: Order) -> Result<OrderReceipt, Error> {
        info!("Placing order: {order}");

        tokio::time::sleep(self.latency).await;

        order.mark_filled()?;
        info!("Order filled: {order}");

        Ok(OrderReceipt::from(order))
    }

    fn exchange_name(&self) -> &'static str {
        "simulated"
    }
}
