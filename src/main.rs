//! `Guessatron` - A number guessing game
//!
//! Starts logging, loads the configuration and runs the Slint window.

// Set Windows subsystem to hide console window
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use guessatron::{
    config::ConfigManager,
    error::{GuessatronError, get_user_friendly_error},
    utils,
};
use gui::GuiController;
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("Guessatron v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ConfigManager::load().context("Failed to load application configuration")?;
    info!(
        "Configuration loaded with {} wallpapers from {}",
        config.wallpapers.len(),
        config.assets_dir.display()
    );

    let gui_controller = match GuiController::new(config).context("Failed to create main window")
    {
        Ok(gui) => gui,
        Err(e) => {
            error!("Failed to initialize GUI: {:#}", e);
            let message = e
                .downcast_ref::<GuessatronError>()
                .map_or_else(|| format!("{e:#}"), get_user_friendly_error);
            eprintln!("ERROR: {message}");
            return Err(e);
        }
    };

    info!("Starting GUI event loop");
    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("Guessatron shutting down");

    Ok(())
}
