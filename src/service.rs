//! Order service: validate raw fields, build the order, hand it to the client.
//!
//! Holds no state between calls beyond the client it owns.

use tracing::debug;

use crate::domain::{validate_side, Order, Price, Quantity};
use crate::error::Result;
use crate::exchange::{OrderClient, OrderReceipt};

pub struct OrderService<C> {
    client: C,
}

impl<C: OrderClient> OrderService<C> {
    pub fn new(client: C) -> Self {
        debug!(exchange = client.exchange_name(), "Order service initialized");
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Validate `side` and submit a MARKET order.
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Quantity,
    ) -> Result<OrderReceipt> {
        let side = validate_side(side)?;
        let order = Order::market(symbol, side, quantity)?;
        self.client.place_order(order).await
    }

    /// Validate `side` and submit a LIMIT order at `price`.
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Quantity,
        price: Price,
    ) -> Result<OrderReceipt> {
        let side = validate_side(side)?;
        let order = Order::limit(symbol, side, quantity, price)?;
        self.client.place_order(order).await
    }
}
