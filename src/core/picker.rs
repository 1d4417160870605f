//! Secret word selection strategies
//!
//! Defines the `WordPicker` trait and its implementations. The picker is the only source of
//! randomness in a game, so tests swap in a `ScriptedPicker`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A strategy for choosing the next secret word
pub trait WordPicker {
    /// Pick an index in `0..len`
    ///
    /// Returns `None` if `len` is zero.
    fn pick(&mut self, len: usize) -> Option<usize>;
}

/// Uniform random selection
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Create a picker seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible picker
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl WordPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }
}

/// Replays a fixed sequence of indices, wrapping around at the end
///
/// Each index is taken modulo the list length.
///
/// # Examples
/// ```
/// use hangman::core::{ScriptedPicker, WordPicker};
///
/// let mut picker = ScriptedPicker::new(vec![2, 0]);
/// assert_eq!(picker.pick(3), Some(2));
/// assert_eq!(picker.pick(3), Some(0));
/// assert_eq!(picker.pick(3), Some(2));
/// ```
pub struct ScriptedPicker {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedPicker {
    #[must_use]
    pub const fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }

    /// Always picks the first word
    #[must_use]
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl WordPicker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let index = if self.indices.is_empty() {
            0
        } else {
            self.indices[self.cursor % self.indices.len()]
        };
        self.cursor += 1;

        Some(index % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_picker_stays_in_range() {
        let mut picker = RandomPicker::seeded(7);
        for _ in 0..200 {
            let index = picker.pick(5).unwrap();
            assert!(index < 5);
        }
    }

    #[test]
    fn random_picker_empty_list() {
        let mut picker = RandomPicker::seeded(7);
        assert_eq!(picker.pick(0), None);
    }

    #[test]
    fn random_picker_covers_every_index() {
        let mut picker = RandomPicker::seeded(42);
        let mut seen = [false; 4];
        for _ in 0..500 {
            seen[picker.pick(4).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn seeded_pickers_agree() {
        let mut a = RandomPicker::seeded(99);
        let mut b = RandomPicker::seeded(99);
        let first: Vec<_> = (0..20).map(|_| a.pick(10)).collect();
        let second: Vec<_> = (0..20).map(|_| b.pick(10)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn scripted_picker_wraps_indices() {
        let mut picker = ScriptedPicker::new(vec![1, 5]);
        assert_eq!(picker.pick(3), Some(1));
        assert_eq!(picker.pick(3), Some(2)); // 5 % 3
        assert_eq!(picker.pick(3), Some(1));
    }

    #[test]
    fn scripted_picker_empty_script() {
        let mut picker = ScriptedPicker::new(Vec::new());
        assert_eq!(picker.pick(4), Some(0));
        assert_eq!(picker.pick(0), None);
    }
}
