//! Guess normalisation and outcomes

use super::error::InvalidGuess;

/// Result of evaluating an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter occurs in the secret word and has been revealed
    Correct,
    /// The letter is absent; one life was lost
    Incorrect,
}

impl GuessOutcome {
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Normalise raw input to a single lowercase letter
///
/// # Errors
/// - `NotSingleCharacter` unless the input is exactly one `char`
/// - `NotAlphabetic` if that char is not a letter, or has no single-char lowercase form
///
/// # Examples
/// ```
/// use hangman::core::normalize_letter;
///
/// assert_eq!(normalize_letter("P"), Ok('p'));
/// assert!(normalize_letter("pp").is_err());
/// assert!(normalize_letter("7").is_err());
/// ```
pub fn normalize_letter(input: &str) -> Result<char, InvalidGuess> {
    let mut chars = input.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(InvalidGuess::NotSingleCharacter(input.to_string()));
    };

    fold_letter(c).ok_or(InvalidGuess::NotAlphabetic(c))
}

/// Fold one character to the form letters are compared in
///
/// Returns `None` for non-letters and for letters whose lowercase form is more than one
/// char. Secret words and guesses both go through here, so they always agree.
pub(crate) fn fold_letter(c: char) -> Option<char> {
    if !c.is_alphabetic() {
        return None;
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        // Final sigma is the same letter as σ
        (Some('ς'), None) => Some('σ'),
        (Some(l), None) => Some(l),
        _ => None,
    }
}
