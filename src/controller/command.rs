//! Commands sent from panels to the application controller

use crate::game::{Difficulty, GameResult};
use crate::settings::{Brightness, WallpaperId};
use std::sync::mpsc;
use tracing::warn;

/// Requests panels make of the application controller
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Discard the active panel and show the main menu
    ShowMainMenu,
    /// Show the settings screen
    ShowSettings,
    /// Start a new game
    StartGame(Difficulty),
    /// Commit a wallpaper selection
    ApplyWallpaper(WallpaperId),
    /// Commit a brightness factor
    ApplyBrightness(Brightness),
    /// Turn music on or off
    SetMusic(bool),
    /// A game reached a terminal status
    GameFinished(GameResult),
    /// Quit the application
    Exit,
}

/// Sending half handed to panels at construction
#[derive(Debug, Clone)]
pub struct CommandSender(mpsc::Sender<AppCommand>);

impl CommandSender {
    /// Queue a command for the controller
    ///
    /// A closed queue means the controller is gone; the command is dropped.
    pub fn send(&self, command: AppCommand) {
        if let Err(e) = self.0.send(command) {
            warn!("Controller gone, dropping command {:?}", e.0);
        }
    }
}

/// Create a command queue
pub fn command_channel() -> (CommandSender, mpsc::Receiver<AppCommand>) {
    let (tx, rx) = mpsc::channel();
    (CommandSender(tx), rx)
}
