//! Response DTOs for the command shell
//!
//! Defines the structure of outgoing JSON response lines.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response to an `add` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddResponse {
    /// The key that was added or updated
    pub key: String,
    /// Whether older entries were evicted to make room
    pub evicted: bool,
}

/// Response to `get` and `peek`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResponse {
    /// The requested key
    pub key: String,
    /// The stored value, absent on a miss
    pub value: Option<String>,
    pub found: bool,
}

impl LookupResponse {
    /// Creates a new LookupResponse
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            found: value.is_some(),
            value,
        }
    }
}

/// Response to `contains`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainsResponse {
    pub key: String,
    pub found: bool,
}

/// Response to `remove`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveResponse {
    /// The key that was targeted
    pub key: String,
    /// Whether anything was removed
    pub removed: bool,
}

/// Response to `remove_oldest` and `get_oldest`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OldestResponse {
    pub key: Option<String>,
    pub value: Option<String>,
    pub found: bool,
}

impl OldestResponse {
    /// Creates a new OldestResponse from an optional key/value pair
    pub fn new(entry: Option<(String, String)>) -> Self {
        match entry {
            Some((key, value)) => Self {
                key: Some(key),
                value: Some(value),
                found: true,
            },
            None => Self {
                key: None,
                value: None,
                found: false,
            },
        }
    }
}

/// Response to `keys`, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeysResponse {
    pub keys: Vec<String>,
}

/// Response to `len` and `size`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

/// Response to `purge` and `purge_expired`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurgeResponse {
    /// Number of entries removed
    pub removed: usize,
}

/// Response to `stats`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Any response the shell can emit, serialized without a wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Add(AddResponse),
    Lookup(LookupResponse),
    Contains(ContainsResponse),
    Remove(RemoveResponse),
    Oldest(OldestResponse),
    Keys(KeysResponse),
    Count(CountResponse),
    Purge(PurgeResponse),
    Stats(StatsResponse),
    Error(ErrorResponse),
}

impl Response {
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_response_serialize() {
        let resp = LookupResponse::new("test_key", Some("test_value".to_string()));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["key"], "test_key");
        assert_eq!(json["value"], "test_value");
        assert_eq!(json["found"], true);
    }

    #[test]
    fn test_lookup_response_miss() {
        let resp = LookupResponse::new("gone", None);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["value"].is_null());
        assert_eq!(json["found"], false);
    }

    #[test]
    fn test_oldest_response_empty() {
        let resp = OldestResponse::new(None);
        assert!(!resp.found);
        assert!(resp.key.is_none());
    }

    #[test]
    fn test_stats_response_flattens_counters() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.set_usage(2, 9);

        let json = serde_json::to_value(StatsResponse::new(stats)).unwrap();
        assert_eq!(json["hits"], 1);
        assert_eq!(json["size"], 9);
        assert_eq!(json["hit_rate"], 0.5);
    }

    #[test]
    fn test_untagged_response_serialize() {
        let resp = Response::Add(AddResponse {
            key: "k".to_string(),
            evicted: true,
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"key":"k","evicted":true}"#);
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = Response::Error(ErrorResponse::new("Something went wrong"));
        assert!(resp.is_error());
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Something went wrong"}"#);
    }
}
