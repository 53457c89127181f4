//! Application configuration
//!
//! Read from `<config_dir>/socialhub/config.toml` (or an explicit path).
//! Every field has a default, so a missing file is not an error.

use crate::error::CoreError;
use crate::session::{validate_key, SessionConfig, DEFAULT_LATENCY, DEFAULT_STORAGE_KEY};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const CONFIG_FILE: &str = "config.toml";
const APP_DIR: &str = "socialhub";

/// Web server settings (`[web]` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3333,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the session slot and the log file live
    pub data_dir: Option<PathBuf>,
    pub storage_key: String,
    /// Artificial latency of login/register/save, in milliseconds
    pub latency_ms: u64,
    pub web: WebConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            latency_ms: DEFAULT_LATENCY.as_millis() as u64,
            web: WebConfig::default(),
        }
    }
}

impl AppConfig {
    /// `<config_dir>/socialhub/config.toml`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from [`AppConfig::default_path`] when `None`
    ///
    /// An explicit path must exist; the default path may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(CoreError::FileRead { path, source }),
        };

        let config = Self::from_toml(&content).map_err(|e| match e {
            CoreError::ConfigParse { message, .. } => CoreError::ConfigParse {
                path: path.clone(),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self, CoreError> {
        let config: Self = toml::from_str(content).map_err(|e| CoreError::ConfigParse {
            path: PathBuf::new(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_key(&self.storage_key)?;
        if self.web.port == 0 {
            return Err(CoreError::InvalidConfig {
                message: "web.port must be non-zero".to_string(),
            });
        }
        Ok(())
    }

    /// Configured data dir, else `<data_dir>/socialhub`
    pub fn resolve_data_dir(&self) -> Result<PathBuf, CoreError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(CoreError::DataDirNotFound),
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            storage_key: self.storage_key.clone(),
            latency: self.latency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.latency(), Duration::from_millis(1000));
        assert_eq!(config.session_config().storage_key, "socialhub_user");
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml(
            r#"
latency_ms = 50

[web]
port = 8080
"#,
        )
        .unwrap();
        assert_eq!(config.latency_ms, 50);
        assert_eq!(config.web.port, 8080);
        assert_eq!(config.web.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_storage_key_rejected() {
        let err = AppConfig::from_toml(r#"storage_key = "../escape""#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidStorageKey { .. }));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/sh\"\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.resolve_data_dir().unwrap(), PathBuf::from("/tmp/sh"));
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, CoreError::FileRead { .. }));
    }

    #[test]
    fn test_parse_error_carries_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "latency_ms = \"soon\"").unwrap();

        match AppConfig::load(Some(&path)).unwrap_err() {
            CoreError::ConfigParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
