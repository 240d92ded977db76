//! Guess evaluation state machine
//!
//! ```text
//! InProgress ──wrong guess, attempts left──▶ InProgress
//!     │  └──────wrong guess, no attempts left──▶ Lost
//!     └──correct guess──▶ Won
//! ```

use crate::error::{GuessError, InvalidInputError, MAX_GUESS, MIN_GUESS};
use crate::game::difficulty::Difficulty;
use crate::game::secret::SecretSource;
use std::num::IntErrorKind;
use tracing::debug;

/// Status of one play-through; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Accepting guesses
    InProgress,
    /// Secret found
    Won,
    /// Attempts exhausted
    Lost,
}

/// Result of an evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess was below the secret
    Higher {
        /// Attempts remaining after this guess
        attempts_left: u32,
    },
    /// Guess was above the secret
    Lower {
        /// Attempts remaining after this guess
        attempts_left: u32,
    },
    /// Guess matched the secret
    Won {
        /// Attempts remaining (unchanged by the winning guess)
        attempts_left: u32,
    },
    /// Last attempt used without finding the secret
    Lost {
        /// The secret, revealed
        secret_number: u8,
    },
}

impl GuessOutcome {
    /// Message shown on the game screen
    pub fn message(&self) -> String {
        match self {
            Self::Higher { attempts_left } => {
                format!("Guess a higher number. {attempts_left} attempts left.")
            }
            Self::Lower { attempts_left } => {
                format!("Guess a lower number. {attempts_left} attempts left.")
            }
            Self::Won { .. } => "Yay! You won!".to_string(),
            Self::Lost { .. } => "No attempts left. Game over.".to_string(),
        }
    }

    /// Terminal result, if this guess ended the game
    pub fn result(&self) -> Option<GameResult> {
        match *self {
            Self::Won { .. } => Some(GameResult::Won),
            Self::Lost { secret_number } => Some(GameResult::Lost { secret_number }),
            Self::Higher { .. } | Self::Lower { .. } => None,
        }
    }
}

/// How a finished game ended, as reported to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Player found the secret
    Won,
    /// Player ran out of attempts
    Lost {
        /// The secret, revealed
        secret_number: u8,
    },
}

/// Parse guess text as a base-10 integer in `1..=100`
///
/// Surrounding whitespace is ignored. Integers too large for `i64` are
/// reported as out of range rather than as non-numbers.
pub fn parse_guess(raw: &str) -> Result<u8, InvalidInputError> {
    let text = raw.trim();
    let value = match text.parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => InvalidInputError::OutOfRange(i64::MAX),
                IntErrorKind::NegOverflow => InvalidInputError::OutOfRange(i64::MIN),
                _ => InvalidInputError::NotANumber(text.to_string()),
            });
        }
    };

    if !(MIN_GUESS..=MAX_GUESS).contains(&value) {
        return Err(InvalidInputError::OutOfRange(value));
    }
    u8::try_from(value).map_err(|_| InvalidInputError::OutOfRange(value))
}

/// One play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    difficulty: Difficulty,
    secret_number: u8,
    attempts_left: u32,
    status: GameStatus,
}

impl GameState {
    /// Start a game drawing the secret from `secrets`
    pub fn new(difficulty: Difficulty, secrets: &mut dyn SecretSource) -> Self {
        Self::with_secret(difficulty, secrets.next_secret())
    }

    /// Start a game with a known secret, clamped into `1..=100`
    pub fn with_secret(difficulty: Difficulty, secret_number: u8) -> Self {
        Self {
            difficulty,
            secret_number: secret_number.clamp(1, 100),
            attempts_left: difficulty.max_attempts(),
            status: GameStatus::InProgress,
        }
    }

    /// Difficulty this game was started with
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The secret number
    pub fn secret_number(&self) -> u8 {
        self.secret_number
    }

    /// Attempts remaining
    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Current status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game reached `Won` or `Lost`
    pub fn is_finished(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Evaluate one guess
    ///
    /// Invalid input and submissions after the game ended are rejected
    /// without touching the state.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_finished() {
            return Err(GuessError::GameOver);
        }

        let guess = parse_guess(raw)?;

        if guess == self.secret_number {
            self.status = GameStatus::Won;
            debug!(
                "Guess {} correct with {} attempts left",
                guess, self.attempts_left
            );
            return Ok(GuessOutcome::Won {
                attempts_left: self.attempts_left,
            });
        }

        self.attempts_left = self.attempts_left.saturating_sub(1);
        debug!(
            "Guess {} wrong, {} attempts left",
            guess, self.attempts_left
        );

        if self.attempts_left == 0 {
            self.status = GameStatus::Lost;
            return Ok(GuessOutcome::Lost {
                secret_number: self.secret_number,
            });
        }

        if guess < self.secret_number {
            Ok(GuessOutcome::Higher {
                attempts_left: self.attempts_left,
            })
        } else {
            Ok(GuessOutcome::Lower {
                attempts_left: self.attempts_left,
            })
        }
    }
}
