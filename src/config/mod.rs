//! Configuration management module
//!
//! This module handles loading the launch configuration: where the wallpaper
//! and music assets live, which wallpapers are offered, and the settings the
//! game starts with. Configuration is read from
//! `<data dir>/config.json`; in-game settings changes are never written back.

pub mod manager;
pub mod models;

pub use manager::ConfigManager;
pub use models::{AppConfig, WindowState};
