//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with size weight and TTL support.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with its key, value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<K, V> {
    /// The key this entry is stored under
    pub key: K,
    /// The stored value
    pub value: V,
    /// Weight contributed to the cache's total size
    pub size: usize,
    /// Expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `size` - The entry's weight
    /// * `ttl` - Optional TTL, counted from now
    pub fn new(key: K, value: V, size: usize, ttl: Option<Duration>) -> Self {
        Self {
            key,
            value,
            size,
            expires_at: expiry_from_now(ttl),
        }
    }

    // == Refresh ==
    /// Replaces value and size in place and restarts the TTL clock.
    pub fn refresh(&mut self, value: V, size: usize, ttl: Option<Duration>) {
        self.value = value;
        self.size = size;
        self.expires_at = expiry_from_now(ttl);
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current instant is strictly past its
    /// expiration instant. Entries without an expiration never expire.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Same as [`is_expired`](Self::is_expired) against a caller-supplied instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(expires) => now > expires,
            None => false,
        }
    }
}

fn expiry_from_now(ttl: Option<Duration>) -> Option<Instant> {
    ttl.map(|ttl| Instant::now() + ttl)
}
