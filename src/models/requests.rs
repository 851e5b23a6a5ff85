//! Request DTOs for the command shell
//!
//! Defines the shape of incoming JSON command lines.

use serde::Deserialize;

use crate::error::{LruError, Result};

/// A single shell command, tagged by its `op` field.
///
/// ```json
/// {"op": "add", "key": "user:1", "value": "alice", "size": 5}
/// {"op": "get", "key": "user:1"}
/// {"op": "remove_oldest"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Insert or update an entry; size defaults to the value's byte length
    Add {
        key: String,
        value: String,
        #[serde(default)]
        size: Option<usize>,
    },
    Get {
        key: String,
    },
    Peek {
        key: String,
    },
    Contains {
        key: String,
    },
    Remove {
        key: String,
    },
    RemoveOldest,
    GetOldest,
    Keys,
    Len,
    Size,
    Stats,
    Purge,
    PurgeExpired,
}

impl Command {
    /// Parses and validates one JSON command line.
    pub fn parse(line: &str) -> Result<Self> {
        let command: Command = serde_json::from_str(line)
            .map_err(|e| LruError::InvalidCommand(e.to_string()))?;
        command.validate()?;
        Ok(command)
    }

    /// Validates the command data
    pub fn validate(&self) -> Result<()> {
        match self.key() {
            Some("") => Err(LruError::InvalidCommand("Key cannot be empty".to_string())),
            _ => Ok(()),
        }
    }

    /// Returns the key the command targets, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Command::Add { key, .. }
            | Command::Get { key }
            | Command::Peek { key }
            | Command::Contains { key }
            | Command::Remove { key } => Some(key),
            _ => None,
        }
    }
}
