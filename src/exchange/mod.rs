//! Exchange abstraction layer.
//!
//! Defines the trait an execution client must fulfill and the simulated
//! client the bot submits to.

mod simulated;
mod traits;

pub use simulated::{SimulatedClient, DEFAULT_LATENCY};
pub use traits::{OrderClient, OrderReceipt};
