//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == LRU Error Enum ==
/// Unified error type for the cache and its command shell.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LruError {
    /// Construction parameters were rejected (e.g. a zero size limit)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A shell command could not be parsed or failed validation
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, LruError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LruError::InvalidConfiguration("size limit must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: size limit must be positive"
        );

        let err = LruError::InvalidCommand("missing key".to_string());
        assert_eq!(err.to_string(), "Invalid command: missing key");
    }
}
