//! `Guessatron` - A number guessing game
//!
//! The player picks a difficulty and tries to find a secret integer in 1..=100
//! within a limited number of attempts, getting a higher/lower hint after each
//! wrong guess. A settings screen changes the background wallpaper, its
//! brightness, and toggles background music.
//!
//! The library holds every piece of game and application logic. The Slint
//! window lives in the binary and only forwards user actions to
//! [`controller::AppController`] and mirrors its state back.
//!
//! # Difficulty
//!
//! - Easy: 10 attempts
//! - Hard: 7 attempts
//! - Expert: 4 attempts

// Module declarations
pub mod audio;
pub mod config;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod game;
pub mod render;
pub mod settings;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use error::{GuessatronError, Result};
