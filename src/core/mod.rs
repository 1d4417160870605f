//! Core domain types for hangman
//!
//! The game state, its inputs (words, guesses, the word picker) and its errors. Nothing in
//! here performs terminal I/O.

mod error;
mod game;
mod guess;
mod picker;
mod stats;
mod word;

pub use error::{GameError, InvalidGuess, WordError};
pub use game::{DEFAULT_LIVES, GameState, MAX_LIVES, PLACEHOLDER};
pub use guess::{GuessOutcome, normalize_letter};
pub use picker::{RandomPicker, ScriptedPicker, WordPicker};
pub use stats::Statistics;
pub use word::Word;
