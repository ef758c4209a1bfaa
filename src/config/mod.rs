//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_notify::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.auto_hide_seconds = Some(8.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedNotify";

/// Process-wide tunables for the notification engine.
///
/// Absent fields fall back to the constants in [`defaults`](self).
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auto_hide_seconds: Option<f32>,
    #[serde(default)]
    pub auto_hide_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_hide_seconds: Some(DEFAULT_AUTO_HIDE_SECS),
            auto_hide_limit: Some(DEFAULT_AUTO_HIDE_LIMIT),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_tunables() {
        let config = Config {
            auto_hide_seconds: Some(7.5),
            auto_hide_limit: Some(5),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.auto_hide_seconds, config.auto_hide_seconds);
        assert_eq!(loaded.auto_hide_limit, config.auto_hide_limit);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.auto_hide_seconds, Some(DEFAULT_AUTO_HIDE_SECS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");
        let config = Config {
            auto_hide_seconds: Some(3.0),
            auto_hide_limit: Some(2),
        };

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_carries_engine_defaults() {
        let config = Config::default();
        assert_eq!(config.auto_hide_seconds, Some(DEFAULT_AUTO_HIDE_SECS));
        assert_eq!(config.auto_hide_limit, Some(DEFAULT_AUTO_HIDE_LIMIT));
    }

    #[test]
    fn missing_fields_deserialize_as_absent() {
        let config: Config = toml::from_str("auto_hide_limit = 4").expect("valid toml");
        assert_eq!(config.auto_hide_limit, Some(4));
        assert!(config.auto_hide_seconds.is_none());
    }
}
