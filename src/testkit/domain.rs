//! Builders for orders used across tests.

use rust_decimal_macros::dec;

use crate::domain::{Order, Side};

/// `BTCUSDT` BUY 1.0 at market.
pub fn market_order() -> Order {
    Order::market("BTCUSDT", Side::Buy, dec!(1.0)).expect("valid market order")
}

/// `ETHUSDT` SELL 2.5 limit 3000.0.
pub fn limit_order() -> Order {
    Order::limit("ETHUSDT", Side::Sell, dec!(2.5), dec!(3000.0)).expect("valid limit order")
}
