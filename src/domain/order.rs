//! The order entity and its enumerations.
//!
//! An [`Order`] can only be built through [`Order::market`] or [`Order::limit`],
//! which enforce every field invariant up front. After construction the only
//! mutation is the single `PENDING -> FILLED` transition performed by the
//! execution client.
//!
//! # Examples
//!
//! ```
//! use tradebot::domain::{Order, OrderStatus, OrderType, Side};
//! use rust_decimal_macros::dec;
//!
//! let order = Order::limit("ethusdt", Side::Sell, dec!(2.5), dec!(3000.0)).unwrap();
//!
//! assert_eq!(order.symbol(), "ETHUSDT");
//! assert_eq!(order.order_type(), OrderType::Limit);
//! assert_eq!(order.price(), Some(dec!(3000.0)));
//! assert_eq!(order.status(), OrderStatus::Pending);
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;
use super::money::{Price, Quantity};
use super::validate::{validate_order_type, validate_side};

/// Client-side order identifier, used to correlate log lines.
///
/// The inner UUID is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
}

impl Side {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_side(s)
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Executes at the current price.
    Market,
    /// Executes at or better than a stated price.
    Limit,
}

impl OrderType {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_order_type(s)
    }
}

/// Order status. Only ever moves forward, once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    /// Built and validated, not yet executed.
    Pending,
    /// Executed by the client.
    Filled,
}

impl OrderStatus {
    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Filled => "FILLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validated trade intent.
///
/// Fields are private; `price` is `Some` exactly when the order type is
/// [`OrderType::Limit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    symbol: String,
    side: Side,
    order_type: OrderType,
    quantity: Quantity,
    price: Option<Price>,
    status: OrderStatus,
}

impl Order {
    /// Build a MARKET order. The symbol is trimmed and upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptySymbol`] or
    /// [`DomainError::NonPositiveQuantity`].
    pub fn market(symbol: &str, side: Side, quantity: Quantity) -> Result<Self, DomainError> {
        Self::build(symbol, side, OrderType::Market, quantity, None)
    }

    /// Build a LIMIT order. The symbol is trimmed and upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptySymbol`],
    /// [`DomainError::NonPositiveQuantity`] or
    /// [`DomainError::NonPositivePrice`].
    pub fn limit(
        symbol: &str,
        side: Side,
        quantity: Quantity,
        price: Price,
    ) -> Result<Self, DomainError> {
        if price <= Decimal::ZERO {
            return Err(DomainError::NonPositivePrice { price });
        }
        Self::build(symbol, side, OrderType::Limit, quantity, Some(price))
    }

    fn build(
        symbol: &str,
        side: Side,
        order_type: OrderType,
        quantity: Quantity,
        price: Option<Price>,
    ) -> Result<Self, DomainError> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(DomainError::EmptySymbol);
        }
        if quantity <= Decimal::ZERO {
            return Err(DomainError::NonPositiveQuantity { quantity });
        }

        Ok(Self {
            id: OrderId::generate(),
            symbol,
            side,
            order_type,
            quantity,
            price,
            status: OrderStatus::Pending,
        })
    }

    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub const fn price(&self) -> Option<Price> {
        self.price
    }

    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Move the order from PENDING to FILLED.
    ///
    /// Only the execution client calls this. A second call is refused.
    pub(crate) fn mark_filled(&mut self) -> Result<(), DomainError> {
        match self.status {
            OrderStatus::Pending => {
                self.status = OrderStatus::Filled;
                Ok(())
            }
            OrderStatus::Filled => Err(DomainError::AlreadyTerminal {
                id: self.id.to_string(),
                status: self.status.as_str(),
            }),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order(id={}, symbol={}, side={}, type={}, quantity={}, price=",
            self.id, self.symbol, self.side, self.order_type, self.quantity
        )?;
        match self.price {
            Some(price) => write!(f, "{price}")?,
            None => f.write_str("None")?,
        }
        write!(f, ", status={})", self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn market_order_has_no_price_and_starts_pending() {
        let order = Order::market("btcusdt", Side::Buy, dec!(1.0)).unwrap();
        assert_eq!(order.symbol(), "BTCUSDT");
        assert_eq!(order.side(), Side::Buy);
        assert_eq!(order.order_type(), OrderType::Market);
        assert_eq!(order.quantity(), dec!(1.0));
        assert_eq!(order.price(), None);
        assert_eq!(order.status(), OrderStatus::Pending);
    }

    #[test]
    fn limit_order_keeps_price() {
        let order = Order::limit("ETHUSDT", Side::Sell, dec!(2.5), dec!(3000.0)).unwrap();
        assert_eq!(order.order_type(), OrderType::Limit);
        assert_eq!(order.price(), Some(dec!(3000.0)));
    }

    #[test]
    fn symbol_is_trimmed_and_required() {
        let order = Order::market("  solusdt ", Side::Buy, dec!(3)).unwrap();
        assert_eq!(order.symbol(), "SOLUSDT");

        let err = Order::market("   ", Side::Buy, dec!(3)).unwrap_err();
        assert_eq!(err, DomainError::EmptySymbol);
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let err = Order::market("BTCUSDT", Side::Buy, dec!(0)).unwrap_err();
        assert!(matches!(err, DomainError::NonPositiveQuantity { .. }));

        let err = Order::limit("BTCUSDT", Side::Sell, dec!(-1), dec!(10)).unwrap_err();
        assert!(matches!(err, DomainError::NonPositiveQuantity { .. }));
    }

    #[test]
    fn rejects_non_positive_limit_price() {
        let err = Order::limit("BTCUSDT", Side::Buy, dec!(1), dec!(0)).unwrap_err();
        assert_eq!(err, DomainError::NonPositivePrice { price: dec!(0) });

        let err = Order::limit("BTCUSDT", Side::Buy, dec!(1), dec!(-5.5)).unwrap_err();
        assert!(matches!(err, DomainError::NonPositivePrice { .. }));
    }

    #[test]
    fn fill_transition_happens_once() {
        let mut order = Order::market("BTCUSDT", Side::Buy, dec!(1)).unwrap();
        order.mark_filled().unwrap();
        assert_eq!(order.status(), OrderStatus::Filled);

        let err = order.mark_filled().unwrap_err();
        assert!(matches!(
            err,
            DomainError::AlreadyTerminal {
                status: "FILLED",
                ..
            }
        ));
        assert_eq!(order.status(), OrderStatus::Filled);
    }

    #[test]
    fn each_order_gets_its_own_id() {
        let a = Order::market("BTCUSDT", Side::Buy, dec!(1)).unwrap();
        let b = Order::market("BTCUSDT", Side::Buy, dec!(1)).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn display_renders_every_field() {
        let order = Order::market("BTCUSDT", Side::Buy, dec!(1.0)).unwrap();
        let text = order.to_string();
        assert!(text.contains("symbol=BTCUSDT"));
        assert!(text.contains("side=BUY"));
        assert!(text.contains("type=MARKET"));
        assert!(text.contains("quantity=1.0"));
        assert!(text.contains("price=None"));
        assert!(text.contains("status=PENDING"));
    }

    #[test]
    fn enums_serialize_upper_case() {
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), "\"SELL\"");
        assert_eq!(serde_json::to_string(&OrderType::Limit).unwrap(), "\"LIMIT\"");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Filled).unwrap(),
            "\"FILLED\""
        );
    }
}
