//! Validation of raw, user-supplied order fields.
//!
//! Side and order type arrive as free-form text and are matched
//! case-insensitively against their fixed sets. Numeric fields arrive as text
//! and are converted with [`parse_decimal`].

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::DomainError;
use super::order::{OrderType, Side};
use crate::error::{Error, Result};

/// Normalize `side` and match it against BUY/SELL.
///
/// # Errors
///
/// Returns [`DomainError::InvalidSide`] for anything else.
pub fn validate_side(side: &str) -> std::result::Result<Side, DomainError> {
    match side.trim().to_uppercase().as_str() {
        "BUY" => Ok(Side::Buy),
        "SELL" => Ok(Side::Sell),
        _ => Err(DomainError::InvalidSide {
            value: side.to_string(),
        }),
    }
}

/// Normalize `order_type` and match it against MARKET/LIMIT.
///
/// # Errors
///
/// Returns [`DomainError::InvalidOrderType`] for anything else.
pub fn validate_order_type(order_type: &str) -> std::result::Result<OrderType, DomainError> {
    match order_type.trim().to_uppercase().as_str() {
        "MARKET" => Ok(OrderType::Market),
        "LIMIT" => Ok(OrderType::Limit),
        _ => Err(DomainError::InvalidOrderType {
            value: order_type.to_string(),
        }),
    }
}

/// Convert prompt text for `field` into a decimal.
///
/// Plain (`2.5`) and scientific (`1e3`) notation are both accepted. Range
/// checks are left to the `Order` constructors.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the text is not a number, or has more
/// fractional digits than a `Decimal` holds exactly.
pub fn parse_decimal(field: &'static str, input: &str) -> Result<Decimal> {
    let text = input.trim();
    let parse_error = || Error::Parse {
        field,
        input: input.to_string(),
    };

    match Decimal::from_str(text) {
        // A lower scale than typed means the parser rounded digits away.
        Ok(value) if value.scale() as usize == fraction_digits(text) => Ok(value),
        Ok(_) => Err(parse_error()),
        Err(_) => Decimal::from_scientific(text).map_err(|_| parse_error()),
    }
}

fn fraction_digits(text: &str) -> usize {
    text.split_once('.')
        .map_or(0, |(_, fraction)| fraction.chars().filter(char::is_ascii_digit).count())
}
