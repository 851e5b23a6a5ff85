//! Shell Handlers
//!
//! Applies parsed commands to the cache and builds their responses.

use tracing::info;

use crate::cache::LruCache;
use crate::config::LruConfig;
use crate::error::Result;
use crate::models::{
    AddResponse, Command, ContainsResponse, CountResponse, ErrorResponse, KeysResponse,
    LookupResponse, OldestResponse, PurgeResponse, RemoveResponse, Response, StatsResponse,
};

/// Shell state: a string-keyed cache that logs every entry leaving it.
#[derive(Debug)]
pub struct Shell {
    pub cache: LruCache<String, String>,
}

impl Shell {
    /// Creates a new Shell around an existing cache.
    pub fn new(cache: LruCache<String, String>) -> Self {
        Self { cache }
    }

    /// Creates a new Shell from configuration.
    ///
    /// Entries leaving the cache are reported through `tracing` at info level.
    pub fn from_config(config: &LruConfig) -> Result<Self> {
        let cache = LruCache::with_evict_callback(
            config.size_limit,
            config.ttl(),
            |key: &String, _value: &String, size| {
                info!(key = %key, size, "entry left cache");
            },
        )?;
        Ok(Self::new(cache))
    }

    /// Parses one input line and executes it.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(e) => Response::Error(ErrorResponse::new(e.to_string())),
        }
    }

    /// Executes a command against the cache.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Add { key, value, size } => {
                let size = size.unwrap_or(value.len());
                let evicted = self.cache.add(key.clone(), value, size);
                Response::Add(AddResponse { key, evicted })
            }
            Command::Get { key } => {
                let value = self.cache.get(&key).cloned();
                Response::Lookup(LookupResponse::new(key, value))
            }
            Command::Peek { key } => {
                let value = self.cache.peek(&key).cloned();
                Response::Lookup(LookupResponse::new(key, value))
            }
            Command::Contains { key } => {
                let found = self.cache.contains(&key);
                Response::Contains(ContainsResponse { key, found })
            }
            Command::Remove { key } => {
                let removed = self.cache.remove(&key);
                Response::Remove(RemoveResponse { key, removed })
            }
            Command::RemoveOldest => {
                Response::Oldest(OldestResponse::new(self.cache.remove_oldest()))
            }
            Command::GetOldest => {
                let oldest = self
                    .cache
                    .get_oldest()
                    .map(|(k, v)| (k.clone(), v.clone()));
                Response::Oldest(OldestResponse::new(oldest))
            }
            Command::Keys => Response::Keys(KeysResponse {
                keys: self.cache.keys(),
            }),
            Command::Len => Response::Count(CountResponse {
                count: self.cache.len(),
            }),
            Command::Size => Response::Count(CountResponse {
                count: self.cache.size(),
            }),
            Command::Stats => Response::Stats(StatsResponse::new(self.cache.stats())),
            Command::Purge => {
                let removed = self.cache.len();
                self.cache.purge();
                Response::Purge(PurgeResponse { removed })
            }
            Command::PurgeExpired => Response::Purge(PurgeResponse {
                removed: self.cache.purge_expired(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_shell() -> Shell {
        Shell::new(LruCache::new(10).unwrap())
    }

    fn add(shell: &mut Shell, key: &str, size: usize) -> Response {
        shell.execute(Command::Add {
            key: key.to_string(),
            value: format!("value_{}", key),
            size: Some(size),
        })
    }

    #[test]
    fn test_add_reports_eviction() {
        let mut shell = test_shell();
        assert_eq!(
            add(&mut shell, "a", 6),
            Response::Add(AddResponse {
                key: "a".to_string(),
                evicted: false
            })
        );
        assert_eq!(
            add(&mut shell, "b", 6),
            Response::Add(AddResponse {
                key: "b".to_string(),
                evicted: true
            })
        );
    }

    #[test]
    fn test_add_with_maximum_size() {
        let mut shell = test_shell();
        add(&mut shell, "a", 1);

        let line = format!(
            r#"{{"op": "add", "key": "b", "value": "x", "size": {}}}"#,
            usize::MAX
        );
        assert_eq!(
            shell.handle_line(&line),
            Response::Add(AddResponse {
                key: "b".to_string(),
                evicted: true
            })
        );
        assert_eq!(shell.cache.len(), 0);
        assert_eq!(shell.cache.size(), 0);
    }

    #[test]
    fn test_add_defaults_size_to_value_length() {
        let mut shell = test_shell();
        shell.execute(Command::Add {
            key: "k".to_string(),
            value: "abcd".to_string(),
            size: None,
        });
        assert_eq!(shell.cache.size(), 4);
    }

    #[test]
    fn test_get_and_miss() {
        let mut shell = test_shell();
        add(&mut shell, "a", 1);

        assert_eq!(
            shell.handle_line(r#"{"op": "get", "key": "a"}"#),
            Response::Lookup(LookupResponse::new("a", Some("value_a".to_string())))
        );
        assert_eq!(
            shell.handle_line(r#"{"op": "get", "key": "zz"}"#),
            Response::Lookup(LookupResponse::new("zz", None))
        );
    }

    #[test]
    fn test_oldest_commands() {
        let mut shell = test_shell();
        add(&mut shell, "a", 1);
        add(&mut shell, "b", 1);

        assert_eq!(
            shell.execute(Command::GetOldest),
            Response::Oldest(OldestResponse::new(Some((
                "a".to_string(),
                "value_a".to_string()
            ))))
        );
        assert_eq!(
            shell.execute(Command::RemoveOldest),
            Response::Oldest(OldestResponse::new(Some((
                "a".to_string(),
                "value_a".to_string()
            ))))
        );
        assert_eq!(
            shell.execute(Command::Keys),
            Response::Keys(KeysResponse {
                keys: vec!["b".to_string()]
            })
        );
    }

    #[test]
    fn test_purge_reports_count() {
        let mut shell = test_shell();
        add(&mut shell, "a", 1);
        add(&mut shell, "b", 1);

        assert_eq!(
            shell.execute(Command::Purge),
            Response::Purge(PurgeResponse { removed: 2 })
        );
        assert_eq!(
            shell.execute(Command::Len),
            Response::Count(CountResponse { count: 0 })
        );
    }

    #[test]
    fn test_invalid_line_is_error() {
        let mut shell = test_shell();
        assert!(shell.handle_line(r#"{"op": "add", "key": "a"}"#).is_error());
    }

    #[test]
    fn test_from_config_rejects_zero_limit() {
        let config = LruConfig {
            size_limit: 0,
            ttl_ms: 0,
        };
        assert!(Shell::from_config(&config).is_err());
    }
}
