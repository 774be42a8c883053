//! Configuration for jotline.
//!
//! A small JSON config controls where event data lives and how dates are
//! shown. Missing config falls back to defaults; a malformed one is an error
//! surfaced at startup rather than silently ignored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::record::DISPLAY_DATE_FORMAT;
use crate::store::EVENTS_FILE;

/// Main configuration for jotline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the event file. Defaults to `~/.jotline`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// chrono format string used when displaying event dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DISPLAY_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load the config at its default location, falling back to defaults when
    /// the file does not exist.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = default_config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Resolve the directory holding jotline data.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Resolve the path of the persisted event file.
    pub fn events_path(&self) -> PathBuf {
        self.data_dir().join(EVENTS_FILE)
    }
}

/// Default data directory: `~/.jotline`, or `.jotline` under the current
/// directory when no home directory can be determined.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".jotline")
}

/// Default config file path inside the data directory.
pub fn default_config_path() -> PathBuf {
    default_data_dir().join("config.json")
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.date_format, "%Y/%m/%d %H:%M");
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/jotline-test")),
            date_format: "%d.%m.%Y %H:%M".to_string(),
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.data_dir, config.data_dir);
        assert_eq!(loaded.date_format, config.date_format);
    }

    #[test]
    fn test_load_missing_fields_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.date_format, "%Y/%m/%d %H:%M");
    }

    #[test]
    fn test_load_malformed_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_events_path_respects_data_dir() {
        let config = Config {
            data_dir: Some(PathBuf::from("/data/jot")),
            ..Default::default()
        };
        assert_eq!(config.events_path(), PathBuf::from("/data/jot/events.json"));
    }
}
