//! Secret word representation
//!
//! A Word is a lowercased, non-empty run of letters, so every position of it can be revealed
//! by some guess.

use super::error::WordError;
use super::guess::fold_letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// A candidate secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Each character is lowercased on its own, exactly as a guessed letter is. Letters whose
    /// lowercase form is more than one character (such as `İ`) are rejected, since no single
    /// guess could match them.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("passion fruit").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let raw: String = text.into();

        if raw.is_empty() {
            return Err(WordError::Empty);
        }

        // Fold per character, the same way guesses are folded
        let chars: Vec<char> = raw
            .chars()
            .map(|c| fold_letter(c).ok_or(WordError::NonAlphabetic(c)))
            .collect::<Result<_, _>>()?;

        let text = chars.iter().collect();
        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters in order
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.chars.iter().collect::<FxHashSet<_>>().len()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.text(), "apple");
        assert_eq!(word.chars(), &['a', 'p', 'p', 'l', 'e']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "apple");

        let word2 = Word::new("ApPlE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("app1e"), Err(WordError::NonAlphabetic('1')));
        assert_eq!(Word::new("star fruit"), Err(WordError::NonAlphabetic(' ')));
        assert_eq!(Word::new("ugli_fruit"), Err(WordError::NonAlphabetic('_')));
    }

    #[test]
    fn word_non_ascii_letters_allowed() {
        let word = Word::new("Açaí").unwrap();
        assert_eq!(word.text(), "açaí");
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_greek_final_sigma_matches_guess() {
        let word = Word::new("ΟΔΟΣ").unwrap();
        assert_eq!(word.text(), "οδοσ");
        assert_eq!(word.distinct_letters(), 3);
        assert_eq!(Word::new("οδος").unwrap(), word);
    }

    #[test]
    fn word_multi_char_lowercase_rejected() {
        assert_eq!(Word::new("İZMİR"), Err(WordError::NonAlphabetic('İ')));
        assert_eq!(Word::new("IZMIR").unwrap().text(), "izmir");
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("apple").unwrap();
        assert!(word.has_letter('a'));
        assert!(word.has_letter('p'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(Word::new("apple").unwrap().distinct_letters(), 4);
        assert_eq!(Word::new("go").unwrap().distinct_letters(), 2);
        assert_eq!(Word::new("aaaa").unwrap().distinct_letters(), 1);
    }

    #[test]
    fn word_display() {
        let word = Word::new("mango").unwrap();
        assert_eq!(format!("{word}"), "mango");
    }
}
