//! Game screen state
//!
//! Wraps a [`GameState`] with the guess entry, the message line and the
//! enabled flag of the input. Terminal results are sent to the controller
//! as [`AppCommand::GameFinished`].

use crate::controller::{AppCommand, CommandSender};
use crate::error::GuessError;
use crate::game::state::{GameState, GuessOutcome};
use tracing::{debug, info};

/// Prompt shown above the guess entry
pub const GUESS_PROMPT: &str = "Guess a number between 1 and 100:";

/// Game screen for one play-through
#[derive(Debug)]
pub struct GamePanel {
    state: GameState,
    input: String,
    message: String,
    input_enabled: bool,
    commands: CommandSender,
}

impl GamePanel {
    /// Create a panel for a freshly started game
    pub fn new(state: GameState, commands: CommandSender) -> Self {
        Self {
            state,
            input: String::new(),
            message: String::new(),
            input_enabled: true,
            commands,
        }
    }

    /// Underlying game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// "Selected Level: ..." header
    pub fn level_label(&self) -> String {
        format!("Selected Level: {}", self.state.difficulty())
    }

    /// Current text of the guess entry
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Message line below the entry
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the guess entry accepts submissions
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Replace the guess entry text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the current entry text
    ///
    /// The entry is cleared whatever the outcome. Rejections become the
    /// message line and are returned for the caller's information only.
    pub fn submit_guess(&mut self) -> Result<GuessOutcome, GuessError> {
        let raw = std::mem::take(&mut self.input);

        let result = if self.input_enabled {
            self.state.submit_guess(&raw)
        } else {
            Err(GuessError::GameOver)
        };

        match &result {
            Ok(outcome) => {
                self.message = outcome.message();
                if let Some(game_result) = outcome.result() {
                    info!(
                        "{} game finished: {:?}",
                        self.state.difficulty(),
                        game_result
                    );
                    if matches!(outcome, GuessOutcome::Lost { .. }) {
                        self.input_enabled = false;
                    }
                    self.commands.send(AppCommand::GameFinished(game_result));
                }
            }
            Err(e) => {
                debug!("Guess {:?} rejected: {}", raw, e);
                self.message = e.hint().to_string();
                if matches!(e, GuessError::GameOver) {
                    self.input_enabled = false;
                }
            }
        }

        result
    }

    /// "Back" button
    pub fn go_back(&self) {
        self.commands.send(AppCommand::ShowMainMenu);
    }

    /// "Exit" button
    pub fn exit(&self) {
        self.commands.send(AppCommand::Exit);
    }
}
