//! Hangman
//!
//! A word-guessing game: a secret word is picked from a list and the player reveals it one
//! letter at a time before running out of lives.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GuessOutcome, ScriptedPicker, Word};
//!
//! let words = vec![Word::new("go").unwrap()];
//! let mut game = GameState::new(words, 5, ScriptedPicker::first()).unwrap();
//!
//! assert_eq!(game.submit_guess("g"), Ok(GuessOutcome::Correct));
//! assert_eq!(game.submit_guess("o"), Ok(GuessOutcome::Correct));
//! assert!(game.is_won());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
