//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::time::Duration;

/// Cache configuration parameters.
///
/// The cache constructor takes a [`Duration`] directly; `Config` is the
/// convenience layer for embedding applications that configure through the
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full-eviction period in milliseconds
    pub ttl_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Eviction period in milliseconds (default: 300000)
    pub fn from_env() -> Self {
        Self {
            ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300_000),
        }
    }

    /// Returns the eviction period as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { ttl_ms: 300_000 }
    }
}
