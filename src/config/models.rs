//! Configuration data models
//!
//! This module defines the data structures used for application configuration.

use crate::settings::{Brightness, Settings, WallpaperId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory wallpaper and music identifiers resolve in
    pub assets_dir: PathBuf,
    /// Wallpapers offered in the settings screen
    pub wallpapers: Vec<String>,
    /// Wallpaper shown at startup
    pub default_wallpaper: String,
    /// Brightness factor at startup (clamped to 0.5-1.5)
    pub default_brightness: f32,
    /// Track played while music is on
    pub music_track: String,
    /// Initial window size
    pub window_state: WindowState,
}

/// Window size at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowState {
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl AppConfig {
    /// Settings the game starts with: configured wallpaper and brightness, music off
    pub fn initial_settings(&self) -> Settings {
        Settings {
            wallpaper_id: WallpaperId::new(self.default_wallpaper.clone()),
            brightness: Brightness::new(self.default_brightness),
            music_on: false,
        }
    }

    /// Wallpaper identifiers offered to the player
    pub fn wallpaper_ids(&self) -> Vec<WallpaperId> {
        self.wallpapers.iter().cloned().map(WallpaperId::new).collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            wallpapers: (1..=5).map(|i| format!("bg{i}.jpg")).collect(),
            default_wallpaper: "bg2.jpg".to_string(),
            default_brightness: 1.0,
            music_track: "feelgood.mp3".to_string(),
            window_state: WindowState::default(),
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
        }
    }
}
