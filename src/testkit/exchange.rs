//! Simulated clients tuned for tests.

use std::time::Duration;

use crate::exchange::SimulatedClient;

/// Client that fills immediately, so tests never wait.
pub fn instant_client() -> SimulatedClient {
    SimulatedClient::new(Duration::ZERO)
}
