//! Round state for a game of hangman
//!
//! `GameState` owns the word list, the current secret word, its reveal mask, the guessed
//! letters and the remaining lives. It performs no I/O: outcomes are returned as data for a
//! front-end to render.

use super::error::{GameError, InvalidGuess};
use super::guess::{GuessOutcome, normalize_letter};
use super::picker::{RandomPicker, WordPicker};
use super::word::Word;
use log::{debug, trace};
use rustc_hash::FxHashSet;

/// Shown in the reveal mask for an unrevealed position
pub const PLACEHOLDER: char = '_';

/// Lives a game starts with unless told otherwise
pub const DEFAULT_LIVES: u32 = 5;

/// Most lives the CLI accepts; one per letter of the English alphabet
pub const MAX_LIVES: u32 = 26;

/// State of a hangman game
///
/// The picker decides which word each round uses.
pub struct GameState<P: WordPicker = RandomPicker> {
    word_list: Vec<Word>,
    picker: P,
    secret_index: usize,
    reveal_mask: Vec<char>,
    remaining_unrevealed: usize,
    remaining_lives: u32,
    starting_lives: u32,
    guessed_letters: Vec<char>,
    guessed_set: FxHashSet<char>,
}

impl<P: WordPicker> GameState<P> {
    /// Create a game and start its first round
    ///
    /// # Errors
    /// - `GameError::EmptyWordList` if `word_list` is empty
    /// - `GameError::NoLives` if `lives` is zero
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{GameState, GuessOutcome, ScriptedPicker, Word};
    ///
    /// let words = vec![Word::new("apple").unwrap()];
    /// let mut game = GameState::new(words, 5, ScriptedPicker::first()).unwrap();
    ///
    /// assert_eq!(game.submit_guess("p"), Ok(GuessOutcome::Correct));
    /// assert_eq!(game.reveal_mask(), &['_', 'p', 'p', '_', '_']);
    /// ```
    pub fn new(word_list: Vec<Word>, lives: u32, picker: P) -> Result<Self, GameError> {
        if word_list.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        if lives == 0 {
            return Err(GameError::NoLives);
        }

        let mut state = Self {
            word_list,
            picker,
            secret_index: 0,
            reveal_mask: Vec::new(),
            remaining_unrevealed: 0,
            remaining_lives: lives,
            starting_lives: lives,
            guessed_letters: Vec::new(),
            guessed_set: FxHashSet::default(),
        };
        state.pick_new_word()?;

        Ok(state)
    }

    /// Start a new round with a freshly picked word
    ///
    /// Resets the mask, the unrevealed letter count and the guessed letters. Remaining lives
    /// carry over untouched; use [`GameState::restart`] for a full reset.
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the picker cannot produce an index.
    pub fn pick_new_word(&mut self) -> Result<&Word, GameError> {
        let len = self.word_list.len();
        let index = self
            .picker
            .pick(len)
            .filter(|&i| i < len)
            .ok_or(GameError::EmptyWordList)?;

        let secret = &self.word_list[index];
        self.secret_index = index;
        self.reveal_mask = vec![PLACEHOLDER; secret.len()];
        self.remaining_unrevealed = secret.distinct_letters();
        self.guessed_letters.clear();
        self.guessed_set.clear();

        debug!(
            "new round: {} letters, {} lives",
            secret.len(),
            self.remaining_lives
        );
        trace!("secret word is {secret}");

        Ok(secret)
    }

    /// Reset lives to the starting count and pick a new word
    ///
    /// Equivalent to constructing a new game from the same word list and life count.
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if the picker cannot produce an index.
    pub fn restart(&mut self) -> Result<&Word, GameError> {
        self.remaining_lives = self.starting_lives;
        self.pick_new_word()
    }

    /// Evaluate a guess against the secret word
    ///
    /// The input is normalised to a lowercase letter. A rejected guess leaves the state
    /// untouched.
    ///
    /// # Errors
    /// - `InvalidGuess::RoundOver` once the round is won or lost
    /// - `InvalidGuess::NotSingleCharacter` / `NotAlphabetic` for anything but one letter
    /// - `InvalidGuess::AlreadyGuessed` for a letter tried earlier this round
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, InvalidGuess> {
        if self.is_round_over() {
            return Err(InvalidGuess::RoundOver);
        }

        let letter = normalize_letter(input)?;
        if !self.guessed_set.insert(letter) {
            return Err(InvalidGuess::AlreadyGuessed(letter));
        }
        self.guessed_letters.push(letter);

        let secret = &self.word_list[self.secret_index];
        let mut found = false;
        for (slot, &c) in self.reveal_mask.iter_mut().zip(secret.chars()) {
            if c == letter {
                *slot = letter;
                found = true;
            }
        }

        let outcome = if found {
            self.remaining_unrevealed -= 1;
            GuessOutcome::Correct
        } else {
            self.remaining_lives -= 1;
            GuessOutcome::Incorrect
        };

        debug!(
            "guess {letter:?}: {outcome:?} ({} unrevealed, {} lives)",
            self.remaining_unrevealed, self.remaining_lives
        );

        Ok(outcome)
    }

    /// True once every distinct letter has been revealed
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.remaining_unrevealed == 0
    }

    /// True once no lives remain
    #[inline]
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.remaining_lives == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_round_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// The word being guessed this round
    #[inline]
    #[must_use]
    pub fn secret_word(&self) -> &Word {
        &self.word_list[self.secret_index]
    }

    /// Current reveal mask, one entry per letter of the secret word
    #[inline]
    #[must_use]
    pub fn reveal_mask(&self) -> &[char] {
        &self.reveal_mask
    }

    /// Letters guessed this round, in the order they were tried
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    /// Check if a (normalised) letter was already tried this round
    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_set.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn remaining_lives(&self) -> u32 {
        self.remaining_lives
    }

    #[inline]
    #[must_use]
    pub const fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    /// Distinct letters of the secret word not yet revealed
    #[inline]
    #[must_use]
    pub const fn remaining_unrevealed(&self) -> usize {
        self.remaining_unrevealed
    }

    #[inline]
    #[must_use]
    pub fn word_list(&self) -> &[Word] {
        &self.word_list
    }
}
