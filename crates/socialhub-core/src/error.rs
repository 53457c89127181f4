//! Error types for socialhub-core
//!
//! Everything that can go wrong in this crate is local: reading or writing the
//! session slot, parsing configuration, or parsing user-supplied filter values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for socialhub operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // IO Errors
    // ===================
    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove file: {path}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===================
    // Key-value slot
    // ===================
    #[error("Invalid storage key '{key}': only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidStorageKey { key: String },

    #[error("Failed to serialize session record")]
    SessionEncode {
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Config Errors
    // ===================
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Could not determine a data directory for socialhub")]
    DataDirNotFound,

    // ===================
    // Parse Errors
    // ===================
    #[error("Unknown post status '{value}' (expected: all, published, scheduled, draft, failed)")]
    UnknownPostStatus { value: String },

    #[error("Unknown analytics period '{value}' (expected: 7d, 30d, 90d, 1y)")]
    UnknownPeriod { value: String },
}

impl CoreError {
    /// Actionable hint for the CLI, if there is one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CoreError::FileRead { path, .. } | CoreError::FileWrite { path, .. } => Some(format!(
                "Check permissions on {}",
                path.parent().unwrap_or(path).display()
            )),
            CoreError::ConfigParse { path, .. } => {
                Some(format!("Fix or remove the config file: {}", path.display()))
            }
            CoreError::DataDirNotFound => {
                Some("Pass --data-dir or set SOCIALHUB_DATA_DIR".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_message() {
        let err = CoreError::InvalidStorageKey {
            key: "../etc".to_string(),
        };
        assert!(err.to_string().contains("../etc"));
        assert!(err.suggestion().is_none());
    }

    #[test]
    fn test_config_parse_suggestion() {
        let err = CoreError::ConfigParse {
            path: PathBuf::from("/tmp/socialhub/config.toml"),
            message: "expected `=`".to_string(),
        };
        let hint = err.suggestion().unwrap();
        assert!(hint.contains("config.toml"));
    }
}
