//! Exchange trait definitions.
//!
//! These traits define the interface that any execution client must provide.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Order, OrderStatus, OrderType, Price, Quantity, Side};
use crate::error::Error;

/// Flattened outcome of a submitted order.
///
/// Carries exactly the six fields shown to the user, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub quantity: Quantity,
    pub price: Option<Price>,
    pub status: OrderStatus,
}

impl OrderReceipt {
    /// Labeled values in display order. An absent price renders as `None`.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, String); 6] {
        [
            ("symbol", self.symbol.clone()),
            ("side", self.side.to_string()),
            ("type", self.order_type.to_string()),
            ("quantity", self.quantity.to_string()),
            (
                "price",
                self.price
                    .map_or_else(|| "None".to_string(), |price| price.to_string()),
            ),
            ("status", self.status.to_string()),
        ]
    }
}

impl From<Order> for OrderReceipt {
    fn from(order: Order) -> Self {
        Self {
            symbol: order.symbol().to_string(),
            side: order.side(),
            order_type: order.order_type(),
            quantity: order.quantity(),
            price: order.price(),
            status: order.status(),
        }
    }
}

/// Client for submitting orders to an exchange.
///
/// The order is moved in: nothing upstream keeps it once submitted.
#[async_trait]
pub trait OrderClient: Send + Sync {
    /// Execute an order and return its flattened outcome.
    async fn place_order(&self, order: Order) -> Result<OrderReceipt, Error>;

    /// Get the exchange name for logging/debugging.
    fn exchange_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn receipt_fields_are_ordered_and_labeled() {
        let order = Order::limit("ETHUSDT", Side::Sell, dec!(2.5), dec!(3000.0)).unwrap();
        let receipt = OrderReceipt::from(order);

        let labels: Vec<_> = receipt.fields().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["symbol", "side", "type", "quantity", "price", "status"]
        );
        assert_eq!(receipt.fields()[4].1, "3000.0");
        assert_eq!(receipt.fields()[5].1, "PENDING");
    }

    #[test]
    fn absent_price_renders_as_none() {
        let order = Order::market("BTCUSDT", Side::Buy, dec!(1.0)).unwrap();
        let receipt = OrderReceipt::from(order);
        assert_eq!(receipt.fields()[4], ("price", "None".to_string()));
    }

    #[test]
    fn receipt_serializes_with_type_key() {
        let order = Order::market("BTCUSDT", Side::Buy, dec!(1.0)).unwrap();
        let value = serde_json::to_value(OrderReceipt::from(order)).unwrap();

        assert_eq!(value["symbol"], "BTCUSDT");
        assert_eq!(value["side"], "BUY");
        assert_eq!(value["type"], "MARKET");
        assert_eq!(value["quantity"], "1.0");
        assert!(value["price"].is_null());
        assert_eq!(value["status"], "PENDING");
    }
}
