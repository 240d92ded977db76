//! Player settings module
//!
//! Holds the process-lifetime [`Settings`] owned by the application
//! controller and the [`SettingsPanel`] form used to change them.
//!
//! # Commit points
//!
//! - Wallpaper and brightness are pending in the panel until the matching
//!   "Apply" action forwards them to the controller.
//! - Music toggles immediately when the checkbox changes.

pub mod models;
pub mod panel;

pub use models::{Brightness, Settings, WallpaperId};
pub use panel::SettingsPanel;
