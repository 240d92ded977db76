//! Application logic controller module
//!
//! This module owns the global settings and decides which screen is visible.
//!
//! # Overview
//!
//! The application controller is the single source of truth that:
//! - **Owns `Settings`** (wallpaper, brightness, music) for the process lifetime
//! - **Creates and discards panels** on navigation (main menu, settings, game)
//! - **Starts games** with the difficulty's attempt budget and a fresh secret
//! - **Drives the collaborators** (background renderer, music player, dialogs)
//!
//! # Command Flow
//!
//! Panels never call the controller or each other. They are handed a
//! [`CommandSender`] when created and queue [`AppCommand`]s on it; the
//! controller drains the queue in [`AppController::dispatch_pending`] after
//! every UI action.
//!
//! ```text
//! SettingsPanel ─┐
//!                ├─ AppCommand ─▶ AppController ─▶ renderer / music / dialogs
//! GamePanel ─────┘                      │
//!                                       └─▶ active panel (GUI reads it back)
//! ```

pub mod app_controller;
pub mod command;

pub use app_controller::{ActivePanel, AppController, Collaborators, Screen};
pub use command::{AppCommand, CommandSender, command_channel};
