//! Error types for Guessatron
//!
//! This module defines all error types used throughout the application,
//! providing clear error messages and proper error propagation.
//!
//! Gameplay has exactly one recoverable error kind, [`InvalidInputError`],
//! which is turned into a corrective hint by the game panel and never
//! consumes an attempt. Everything else ([`GuessatronError`]) comes from the
//! collaborators around the game (wallpaper rendering, audio, configuration)
//! and is logged rather than shown.

use thiserror::Error;

/// Smallest accepted guess
pub const MIN_GUESS: i64 = 1;

/// Largest accepted guess
pub const MAX_GUESS: i64 = 100;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Rejected guess text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Text is not a base-10 integer
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// Integer outside the playable range
    #[error("{0} is outside the range {MIN_GUESS}..={MAX_GUESS}")]
    OutOfRange(i64),
}

impl InvalidInputError {
    /// Corrective hint shown on the game screen
    pub fn hint(&self) -> &'static str {
        match self {
            Self::NotANumber(_) => "Please enter a valid number.",
            Self::OutOfRange(_) => "Please enter a number between 1 and 100.",
        }
    }
}

/// Reasons a guess submission is not evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The guess text was rejected; no attempt was consumed
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The game already reached a terminal status
    #[error("The game is over")]
    GameOver,
}

impl GuessError {
    /// Message shown on the game screen for this rejection
    pub fn hint(&self) -> &'static str {
        match self {
            Self::InvalidInput(e) => e.hint(),
            Self::GameOver => "No attempts left. Game over.",
        }
    }
}

/// Main error type for Guessatron infrastructure
#[derive(Debug, Error)]
pub enum GuessatronError {
    /// Wallpaper identifier not offered by the configuration
    #[error("Unknown wallpaper: {0}")]
    UnknownWallpaper(String),

    /// Failed to render the background image
    /// Preserves the underlying error source for full error chain transparency
    #[error("Failed to render background: {0}")]
    RenderError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Failed to start or stop background music
    /// Preserves the underlying error source for full error chain transparency
    #[error("Audio error: {0}")]
    AudioError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Failed to create the game window or run its event loop
    /// Preserves the underlying error source for full error chain transparency
    #[error("GUI error: {0}")]
    GuiError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("Configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Image decoding error
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}

/// Result type alias for Guessatron operations
pub type Result<T> = std::result::Result<T, GuessatronError>;

/// Convert an error to a user-friendly message
///
/// Used by the binary when startup fails before the window is available.
pub fn get_user_friendly_error(error: &GuessatronError) -> String {
    match error {
        GuessatronError::UnknownWallpaper(id) => {
            format!(
                "The wallpaper \"{id}\" is not available.\n\n\
                 Pick one of the wallpapers listed in the settings screen."
            )
        }
        GuessatronError::RenderError(_) | GuessatronError::ImageError(_) => {
            "Unable to display the background image.\n\n\
             Please check that the wallpaper files exist in the assets directory."
                .to_string()
        }
        GuessatronError::AudioError(_) => "Unable to play background music.\n\n\
             Please check that an audio output device is available."
            .to_string(),
        GuessatronError::GuiError(_) => "Unable to open the game window.\n\n\
             Please check that a display is available and graphics drivers are up to date."
            .to_string(),
        GuessatronError::ConfigError(_) => "Failed to load configuration.\n\n\
             The game will start with default settings."
            .to_string(),
        GuessatronError::IoError(e) => {
            format!(
                "A file system error occurred:\n\n{e}\n\n\
                 Please check file permissions and disk space."
            )
        }
        GuessatronError::JsonError(e) => {
            format!(
                "Configuration file is corrupted:\n\n{e}\n\n\
                 The game will use default settings."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_hints() {
        assert_eq!(
            InvalidInputError::NotANumber("abc".into()).hint(),
            "Please enter a valid number."
        );
        assert_eq!(
            InvalidInputError::OutOfRange(200).hint(),
            "Please enter a number between 1 and 100."
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let error = InvalidInputError::OutOfRange(0);
        assert_eq!(error.to_string(), "0 is outside the range 1..=100");
    }

    #[test]
    fn test_guess_error_from_invalid_input() {
        let error: GuessError = InvalidInputError::NotANumber("x".into()).into();
        assert!(matches!(error, GuessError::InvalidInput(_)));
        assert_eq!(error.hint(), "Please enter a valid number.");
    }

    #[test]
    fn test_game_over_hint() {
        assert_eq!(GuessError::GameOver.hint(), "No attempts left. Game over.");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: GuessatronError = io_error.into();
        assert!(matches!(error, GuessatronError::IoError(_)));
    }

    #[test]
    fn test_unknown_wallpaper_display() {
        let error = GuessatronError::UnknownWallpaper("bg9.jpg".to_string());
        assert_eq!(error.to_string(), "Unknown wallpaper: bg9.jpg");
    }

    #[test]
    fn test_unknown_wallpaper_user_friendly() {
        let error = GuessatronError::UnknownWallpaper("bg9.jpg".to_string());
        let message = get_user_friendly_error(&error);
        assert!(message.contains("bg9.jpg"));
        assert!(message.contains("settings screen"));
    }

    #[test]
    fn test_gui_error_user_friendly() {
        let error = GuessatronError::GuiError(StringError::new("no display"));
        assert_eq!(error.to_string(), "GUI error: no display");

        let message = get_user_friendly_error(&error);
        assert!(message.contains("game window"));
        assert!(!message.contains("wallpaper"));
    }

    #[test]
    fn test_audio_error_display() {
        let error = GuessatronError::AudioError(StringError::new("no device"));
        assert_eq!(error.to_string(), "Audio error: no device");
        assert!(get_user_friendly_error(&error).contains("audio output device"));
    }
}
