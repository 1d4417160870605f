//! Word lists for hangman
//!
//! Provides the embedded default list and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
