//! Number-guessing game module
//!
//! One play-through is a [`GameState`]: a secret number in `1..=100`, an
//! attempt budget derived from the [`Difficulty`], and a one-way status.
//! The [`GamePanel`] wraps it with the game screen's input field and message
//! line and reports the result to the application controller.
//!
//! # Attempt policy
//!
//! - Invalid input (not an integer, or outside `1..=100`) never consumes an attempt
//! - A wrong guess consumes exactly one attempt
//! - A correct guess wins without consuming an attempt
//! - Reaching zero attempts without a correct guess loses the game
//!
//! ```
//! use guessatron::game::{Difficulty, GameState, GuessOutcome};
//!
//! let mut game = GameState::with_secret(Difficulty::Expert, 42);
//! assert!(game.submit_guess("abc").is_err());
//! assert!(game.submit_guess("200").is_err());
//! assert_eq!(game.submit_guess("50"), Ok(GuessOutcome::Lower { attempts_left: 3 }));
//! assert_eq!(game.submit_guess("42"), Ok(GuessOutcome::Won { attempts_left: 3 }));
//! ```

pub mod difficulty;
pub mod panel;
pub mod secret;
pub mod state;

pub use difficulty::Difficulty;
pub use panel::GamePanel;
pub use secret::{FixedSecret, RandomSecret, SecretSource};
pub use state::{GameResult, GameState, GameStatus, GuessOutcome, parse_guess};
