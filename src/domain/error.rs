//! Domain validation errors for order types.
//!
//! This module defines errors that occur when order invariants are violated.
//! These errors are returned by the validators and by the `Order` constructors.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use tradebot::domain::error::DomainError;
//! use tradebot::domain::validate_side;
//!
//! let result = validate_side("hold");
//!
//! assert!(matches!(result, Err(DomainError::InvalidSide { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when order invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Side text did not name BUY or SELL.
    #[error("Side must be BUY or SELL, got '{value}'")]
    InvalidSide {
        /// The rejected input, as typed.
        value: String,
    },

    /// Order type text did not name MARKET or LIMIT.
    #[error("Order type must be MARKET or LIMIT, got '{value}'")]
    InvalidOrderType {
        /// The rejected input, as typed.
        value: String,
    },

    /// Symbol was empty after trimming.
    #[error("symbol cannot be empty")]
    EmptySymbol,

    /// Quantity must be strictly positive.
    #[error("quantity must be positive, got {quantity}")]
    NonPositiveQuantity {
        /// The invalid quantity that was provided.
        quantity: Decimal,
    },

    /// A limit price must be strictly positive.
    #[error("limit price must be positive, got {price}")]
    NonPositivePrice {
        /// The invalid price that was provided.
        price: Decimal,
    },

    /// The order already reached a terminal status.
    #[error("order {id} is already {status}")]
    AlreadyTerminal {
        /// Client order id.
        id: String,
        /// Status the order is stuck in.
        status: &'static str,
    },
}
