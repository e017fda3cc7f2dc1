//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`logs`]: In-memory log capture using the production line layout.
//! - [`domain`]: Ready-made market and limit orders.
//! - [`exchange`]: Simulated clients with test-friendly latencies.
//! - [`config`]: Canonical test configurations.

pub mod config;
pub mod domain;
pub mod exchange;
pub mod logs;
