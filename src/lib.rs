//! Tradebot - a simplified trading bot.
//!
//! Accepts order parameters (symbol, side, order type, quantity, optional
//! price), validates them, and submits the resulting order to a simulated
//! exchange client that fills every order after a fixed delay.
//!
//! # Modules
//!
//! - [`domain`] - The `Order` entity, its enumerations, and field validation
//! - [`exchange`] - The `OrderClient` trait and the simulated client
//! - [`service`] - Validated construction and submission of orders
//! - [`cli`] - Command-line surface, prompts, and the order flow
//! - [`config`] - Configuration loading from TOML
//! - [`logging`] - File logging in the `<timestamp> - <LEVEL> - <message>` layout
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use tradebot::exchange::SimulatedClient;
//! use tradebot::service::OrderService;
//! use rust_decimal_macros::dec;
//!
//! # async fn demo() -> tradebot::error::Result<()> {
//! let service = OrderService::new(SimulatedClient::default());
//! let receipt = service.place_market_order("BTCUSDT", "buy", dec!(1.0)).await?;
//! assert_eq!(receipt.status.as_str(), "FILLED");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod service;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
