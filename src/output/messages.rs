//! Player-facing message text
//!
//! Shared by the line-based mode and the TUI so both say the same thing.

use super::formatters::format_mask;
use crate::core::{GameState, GuessOutcome, InvalidGuess, WordPicker};

/// Lines describing the outcome of an accepted guess
#[must_use]
pub fn outcome_lines(letter: char, outcome: GuessOutcome, lives: u32) -> Vec<String> {
    match outcome {
        GuessOutcome::Correct => vec![format!("Good guess! {letter} is in the word.")],
        GuessOutcome::Incorrect => vec![
            format!("Sorry, {letter} is not in the word."),
            format!("You have {lives} lives left."),
        ],
    }
}

/// Message for a rejected guess
#[must_use]
pub fn rejection_message(error: &InvalidGuess) -> &'static str {
    match error {
        InvalidGuess::NotSingleCharacter(_) | InvalidGuess::NotAlphabetic(_) => {
            "Invalid letter. Please, enter a single alphabetical character."
        }
        InvalidGuess::AlreadyGuessed(_) => "You already tried that letter!",
        InvalidGuess::RoundOver => "The round is over.",
    }
}

#[must_use]
pub fn progress_line(mask: &[char]) -> String {
    format!("Word guessed so far: {}", format_mask(mask))
}

/// Result line for a finished round, `None` while it is still in progress
#[must_use]
pub fn round_result_line<P: WordPicker>(game: &GameState<P>) -> Option<String> {
    if game.is_won() {
        Some("Congratulations. You won the game!".to_string())
    } else if game.is_lost() {
        Some(format!("You lost! The word was {}.", game.secret_word()))
    } else {
        None
    }
}
