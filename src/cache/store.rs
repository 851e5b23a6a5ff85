//! Cache Store Module
//!
//! Main cache engine combining key lookup with LRU tracking, size accounting and TTL expiration.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, LruTracker, NodeId};
use crate::config::LruConfig;
use crate::error::{LruError, Result};

/// Callback invoked with the key, value and size of every entry leaving the cache.
///
/// The callback runs synchronously on the caller's thread while the cache is
/// mutably borrowed, so it cannot reach back into the cache that invoked it.
///
/// `Send` keeps the cache movable into a `Mutex` shared across threads; capture
/// `Arc<Mutex<_>>` rather than `Rc<RefCell<_>>` for state the callback updates.
pub type EvictCallback<K, V> = Box<dyn FnMut(&K, &V, usize) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Removal {
    Evicted,
    Expired,
    Explicit,
}

// == LRU Cache ==
/// Size-bounded LRU cache with optional TTL.
///
/// Each entry carries a caller-supplied size. Inserting a new key evicts from the
/// least recently used end until the cumulative size fits the configured limit.
/// Expired entries are only discovered when a read path touches them.
///
/// The cache is not synchronized; wrap it in a lock to share it between threads.
pub struct LruCache<K, V> {
    /// Key to node handle
    index: HashMap<K, NodeId>,
    /// Entries in recency order, front = most recently used
    order: LruTracker<CacheEntry<K, V>>,
    /// Sum of the sizes of all live entries
    current_size: usize,
    size_limit: usize,
    /// None when expiry is disabled
    ttl: Option<Duration>,
    on_evict: Option<EvictCallback<K, V>>,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructors ==
    /// Creates a cache without expiry or eviction callback.
    ///
    /// Fails with [`LruError::InvalidConfiguration`] if `size_limit` is zero.
    pub fn new(size_limit: usize) -> Result<Self> {
        Self::build(size_limit, Duration::ZERO, None)
    }

    /// Creates a cache whose entries expire `ttl` after their last insert or update.
    ///
    /// A zero `ttl` disables expiry.
    pub fn with_ttl(size_limit: usize, ttl: Duration) -> Result<Self> {
        Self::build(size_limit, ttl, None)
    }

    /// Creates a cache that reports every removed entry to `on_evict`.
    ///
    /// # Arguments
    /// * `size_limit` - Maximum cumulative size, must be positive
    /// * `ttl` - Entry time-to-live, zero disables expiry
    /// * `on_evict` - Called with key, value and size of each entry leaving the cache
    pub fn with_evict_callback<F>(size_limit: usize, ttl: Duration, on_evict: F) -> Result<Self>
    where
        F: FnMut(&K, &V, usize) + Send + 'static,
    {
        Self::build(size_limit, ttl, Some(Box::new(on_evict)))
    }

    /// Creates a cache from loaded configuration.
    pub fn from_config(config: &LruConfig) -> Result<Self> {
        Self::with_ttl(config.size_limit, config.ttl())
    }

    fn build(
        size_limit: usize,
        ttl: Duration,
        on_evict: Option<EvictCallback<K, V>>,
    ) -> Result<Self> {
        if size_limit == 0 {
            return Err(LruError::InvalidConfiguration(
                "size limit must be positive".to_string(),
            ));
        }

        Ok(Self {
            index: HashMap::new(),
            order: LruTracker::new(),
            current_size: 0,
            size_limit,
            ttl: (!ttl.is_zero()).then_some(ttl),
            on_evict,
            stats: CacheStats::new(),
        })
    }

    // == Add ==
    /// Inserts or updates an entry, returning true if any entry was evicted.
    ///
    /// An existing key has its value, size and expiry replaced in place and is
    /// promoted to most recently used; updates never evict. A new key is pushed
    /// to the front, then the oldest entries are evicted while the total size
    /// exceeds the limit. An entry larger than the limit therefore ends up
    /// evicting itself.
    ///
    /// If the total would overflow `usize`, older entries are evicted first until
    /// the new size can be counted; an update only reports eviction in that case.
    pub fn add(&mut self, key: K, value: V, size: usize) -> bool {
        if let Some(&id) = self.index.get(&key) {
            self.order.move_to_front(id);
            let old_size = self.order.get(id).map_or(0, |entry| entry.size);
            // The updated entry is excluded from the total until its new size is known
            self.current_size -= old_size;
            let evicted = self.make_room(size, Some(id));
            if let Some(entry) = self.order.get_mut(id) {
                entry.refresh(value, size, self.ttl);
            }
            self.current_size += size;
            trace!(size, total = self.current_size, "updated cache entry");
            return evicted;
        }

        let mut evicted = self.make_room(size, None);
        let id = self
            .order
            .push_front(CacheEntry::new(key.clone(), value, size, self.ttl));
        self.index.insert(key, id);
        self.current_size += size;
        trace!(size, total = self.current_size, "inserted cache entry");

        while self.current_size > self.size_limit {
            let Some(oldest) = self.order.back() else {
                break;
            };
            self.remove_node(oldest, Removal::Evicted);
            evicted = true;
        }
        evicted
    }

    // == Get ==
    /// Looks up a key, promoting it to most recently used on a hit.
    ///
    /// An expired entry is removed and reported as a miss.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(id) = self.live_node(key) else {
            self.stats.record_miss();
            return None;
        };
        self.stats.record_hit();
        self.order.move_to_front(id);
        self.order.get(id).map(|entry| &entry.value)
    }

    // == Contains ==
    /// Checks if a key is present without updating its recency.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn contains<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.live_node(key).is_some()
    }

    // == Peek ==
    /// Returns a key's value without updating its recency.
    ///
    /// An expired entry is removed and reported as absent.
    pub fn peek<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.live_node(key)?;
        self.order.get(id).map(|entry| &entry.value)
    }

    // == Remove ==
    /// Removes a key regardless of its expiry, returning whether it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(key).copied() {
            Some(id) => self.remove_node(id, Removal::Explicit).is_some(),
            None => false,
        }
    }

    // == Remove Oldest ==
    /// Removes and returns the least recently used entry without checking expiry.
    pub fn remove_oldest(&mut self) -> Option<(K, V)> {
        let id = self.order.back()?;
        let entry = self.remove_node(id, Removal::Explicit)?;
        Some((entry.key, entry.value))
    }

    // == Get Oldest ==
    /// Returns the least recently used live entry without updating recency.
    ///
    /// Expired entries found at the back are removed along the way.
    pub fn get_oldest(&mut self) -> Option<(&K, &V)> {
        let id = loop {
            let id = self.order.back()?;
            let expired = self.order.get(id).map_or(false, |entry| entry.is_expired());
            if !expired {
                break id;
            }
            self.remove_node(id, Removal::Expired);
        };
        self.order.get(id).map(|entry| (&entry.key, &entry.value))
    }

    // == Keys ==
    /// Returns all keys from oldest to newest, including not yet detected expired ones.
    pub fn keys(&self) -> Vec<K> {
        self.order.iter_rev().map(|entry| entry.key.clone()).collect()
    }

    // == Purge ==
    /// Removes every entry, reporting each one to the eviction callback.
    pub fn purge(&mut self) {
        let count = self.order.len();
        self.index.clear();
        for entry in self.order.drain() {
            if let Some(on_evict) = self.on_evict.as_mut() {
                on_evict(&entry.key, &entry.value, entry.size);
            }
        }
        self.current_size = 0;
        debug!(count, "purged cache");
    }

    // == Purge Expired ==
    /// Removes all expired entries in one pass.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<NodeId> = self
            .index
            .values()
            .copied()
            .filter(|&id| {
                self.order
                    .get(id)
                    .map_or(false, |entry| entry.is_expired_at(now))
            })
            .collect();

        let count = expired.len();
        for id in expired {
            self.remove_node(id, Removal::Expired);
        }
        if count > 0 {
            debug!(count, "purged expired entries");
        }
        count
    }

    // == Accessors ==
    /// Returns the number of entries, including not yet detected expired ones.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the cumulative size of all entries.
    pub fn size(&self) -> usize {
        self.current_size
    }

    pub fn size_limit(&self) -> usize {
        self.size_limit
    }

    /// Returns the entry TTL, None when expiry is disabled.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_usage(self.order.len(), self.current_size);
        stats
    }

    // Resolves a key to a live node, dropping it first if it has expired.
    fn live_node<Q>(&mut self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = *self.index.get(key)?;
        let expired = self.order.get(id).map_or(false, |entry| entry.is_expired());
        if expired {
            self.remove_node(id, Removal::Expired);
            return None;
        }
        Some(id)
    }

    // Evicts from the back until `size` can be added to the total without
    // overflowing. `keep` is never evicted.
    fn make_room(&mut self, size: usize, keep: Option<NodeId>) -> bool {
        let mut evicted = false;
        while self.current_size.checked_add(size).is_none() {
            let Some(oldest) = self.order.back() else {
                break;
            };
            if Some(oldest) == keep {
                break;
            }
            self.remove_node(oldest, Removal::Evicted);
            evicted = true;
        }
        evicted
    }

    fn remove_node(&mut self, id: NodeId, reason: Removal) -> Option<CacheEntry<K, V>> {
        let entry = self.order.remove(id)?;
        self.index.remove(&entry.key);
        self.current_size -= entry.size;

        match reason {
            Removal::Evicted => {
                self.stats.record_eviction();
                debug!(size = entry.size, total = self.current_size, "evicted oldest entry");
            }
            Removal::Expired => {
                self.stats.record_expiration();
                debug!(size = entry.size, "removed expired entry");
            }
            Removal::Explicit => {}
        }

        if let Some(on_evict) = self.on_evict.as_mut() {
            on_evict(&entry.key, &entry.value, entry.size);
        }
        Some(entry)
    }
}

impl<K, V> fmt::Debug for LruCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.order.len())
            .field("current_size", &self.current_size)
            .field("size_limit", &self.size_limit)
            .field("ttl", &self.ttl)
            .field("has_evict_callback", &self.on_evict.is_some())
            .finish()
    }
}
