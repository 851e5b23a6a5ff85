//! Cache Module
//!
//! Size-weighted LRU cache with lazy TTL expiration and eviction callbacks.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{Iter, LruTracker, NodeId};
pub use stats::CacheStats;
pub use store::{EvictCallback, LruCache};
