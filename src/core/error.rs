//! Error types for the game core

use thiserror::Error;

/// Errors that prevent a round from starting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// There is nothing to pick a secret word from
    #[error("word list is empty")]
    EmptyWordList,
    /// A game must start with at least one life
    #[error("a game needs at least one life")]
    NoLives,
}

/// A guess that was rejected before evaluation
///
/// Rejected guesses never change the game state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGuess {
    #[error("expected a single character, got {0:?}")]
    NotSingleCharacter(String),
    #[error("{0:?} is not a letter")]
    NotAlphabetic(char),
    #[error("{0:?} was already guessed")]
    AlreadyGuessed(char),
    #[error("the round is over")]
    RoundOver,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only letters, found {0:?}")]
    NonAlphabetic(char),
}
