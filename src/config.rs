//! Configuration Module
//!
//! Handles loading cache construction parameters from environment variables.

use std::env;
use std::time::Duration;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruConfig {
    /// Cumulative size budget across all entries
    pub size_limit: usize,
    /// Time-to-live in milliseconds, 0 disables expiry
    pub ttl_ms: u64,
}

impl LruConfig {
    /// Creates a new LruConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SIZE_LIMIT` - Total size budget (default: 1024)
    /// - `TTL_MS` - Entry time-to-live in milliseconds (default: 0, never expires)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            size_limit: env::var("SIZE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.size_limit),
            ttl_ms: env::var("TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.ttl_ms),
        }
    }

    /// Returns the configured TTL as a Duration (zero when disabled).
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for LruConfig {
    fn default() -> Self {
        Self {
            size_limit: 1024,
            ttl_ms: 0,
        }
    }
}
