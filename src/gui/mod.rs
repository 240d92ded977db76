//! GUI module
//!
//! Provides the Slint-based window and keeps it in sync with the application controller.

pub mod gui_controller;

pub use gui_controller::GuiController;
