//! Monetary types for price and quantity representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Quantity, in units of the instrument, represented as a Decimal.
pub type Quantity = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn decimal_keeps_the_scale_it_was_typed_with() {
        let price: Price = dec!(3000.0);
        let quantity: Quantity = dec!(2.5);

        assert_eq!(price.to_string(), "3000.0");
        assert_eq!((price * quantity).to_string(), "7500.00");
    }
}
