//! Modal-dialog collaborator
//!
//! The controller reports finished games through [`Dialogs::show_info`];
//! the GUI implements it with a modal overlay that blocks input until the
//! player acknowledges it.

use tracing::info;

/// Win/loss dialog title
pub const WIN_TITLE: &str = "Congratulations!";
/// Win dialog message
pub const WIN_MESSAGE: &str = "Yay! You won!";
/// Loss dialog title
pub const LOSS_TITLE: &str = "Game Over";

/// Loss dialog message revealing the secret
pub fn loss_message(secret_number: u8) -> String {
    format!("The secret number was {secret_number}. Game over.")
}

/// Modal-dialog collaborator
pub trait Dialogs {
    /// Show an informational message
    fn show_info(&mut self, title: &str, message: &str);
}

/// Writes dialogs to the log; used when no window is available
#[derive(Debug, Default)]
pub struct LogDialogs;

impl Dialogs for LogDialogs {
    fn show_info(&mut self, title: &str, message: &str) {
        info!("[{}] {}", title, message);
    }
}
