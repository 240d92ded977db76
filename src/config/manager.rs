//! Configuration manager for loading application configuration
//!
//! This module provides functionality to locate the Guessatron data directory
//! and load `config.json` from it.

use crate::config::models::AppConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the data directory
pub const HOME_ENV: &str = "GUESSATRON_HOME";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the data directory holding the configuration and log files
    ///
    /// Returns `$GUESSATRON_HOME` when set, otherwise `%APPDATA%\Guessatron`,
    /// otherwise `./Guessatron`.
    pub fn get_data_dir() -> PathBuf {
        if let Ok(home) = std::env::var(HOME_ENV) {
            return PathBuf::from(home);
        }
        let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(appdata).join("Guessatron")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_data_dir().join("config.json")
    }

    /// Load configuration from the default location
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from an explicit path
    ///
    /// Missing or unparsable files yield the default configuration; only I/O
    /// failures on an existing file are reported as errors.
    pub fn load_from(config_path: &Path) -> Result<AppConfig> {
        if !config_path.exists() {
            info!(
                "Configuration file {} not found, using defaults",
                config_path.display()
            );
            return Ok(AppConfig::default());
        }

        let json = std::fs::read_to_string(config_path)?;

        match serde_json::from_str(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                Ok(config)
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                Ok(AppConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{HomeGuard, create_test_dir};

    #[test]
    fn test_config_path_uses_home_override() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);

        let path = ConfigManager::get_config_path();
        assert_eq!(path, temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = create_test_dir();
        let config = ConfigManager::load_from(&temp_dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_corrupt_config_falls_back_to_defaults() {
        let temp_dir = create_test_dir();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = ConfigManager::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_custom_config() {
        let temp_dir = create_test_dir();
        let _guard = HomeGuard::new(&temp_dir);
        std::fs::write(
            temp_dir.path().join("config.json"),
            r#"{"wallpapers": ["space.png"], "default_wallpaper": "space.png"}"#,
        )
        .unwrap();

        let config = ConfigManager::load().unwrap();
        assert_eq!(config.wallpapers, vec!["space.png".to_string()]);
        assert_eq!(config.default_wallpaper, "space.png");
    }
}
