//! Exchange-agnostic order types and validation.

pub mod error;
mod money;
mod order;
mod validate;

pub use error::DomainError;
pub use money::{Price, Quantity};
pub use order::{Order, OrderId, OrderStatus, OrderType, Side};
pub use validate::{parse_decimal, validate_order_type, validate_side};
