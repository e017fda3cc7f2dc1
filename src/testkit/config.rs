//! Canonical test configurations.

use crate::config::{ClientConfig, Config};

/// Default config with a zero-latency client, so tests never wait.
pub fn fast_config() -> Config {
    Config {
        client: ClientConfig { latency_ms: 0 },
        ..Config::default()
    }
}
