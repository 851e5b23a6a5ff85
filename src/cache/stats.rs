//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, evictions and expirations.

use serde::{Deserialize, Serialize};

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of successful `get` lookups
    pub hits: u64,
    /// Number of failed `get` lookups (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted to satisfy the size budget
    pub evictions: u64,
    /// Number of entries removed because their TTL had elapsed
    pub expirations: u64,
    /// Current number of entries in the cache
    pub entries: usize,
    /// Current cumulative size of the cache
    pub size: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    // == Update Gauges ==
    /// Updates the entry count and size gauges.
    pub fn set_usage(&mut self, entries: usize, size: usize) {
        self.entries = entries;
        self.size = size;
    }
}
