//! size_lru - A size-weighted LRU cache
//!
//! Holds entries up to a cumulative size budget, evicts least recently used
//! entries when the budget is exceeded, and optionally expires entries after a
//! fixed TTL. Expiry is lazy: expired entries are removed when a read touches them.
//!
//! ```
//! use size_lru::LruCache;
//!
//! let mut cache = LruCache::new(10).unwrap();
//! cache.add("a", 1, 5);
//! cache.add("b", 2, 5);
//! assert!(cache.add("c", 3, 5)); // evicts "a"
//! assert_eq!(cache.keys(), vec!["b", "c"]);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;

pub use cache::{CacheStats, EvictCallback, LruCache};
pub use config::LruConfig;
pub use error::{LruError, Result};
