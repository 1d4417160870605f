//! Formatting utilities for terminal output

use crate::core::MAX_LIVES;

/// Render a reveal mask with its positions separated by spaces
///
/// # Examples
/// ```
/// use hangman::output::formatters::format_mask;
///
/// assert_eq!(format_mask(&['_', 'p', 'p', '_', '_']), "_ p p _ _");
/// ```
#[must_use]
pub fn format_mask(mask: &[char]) -> String {
    let mut result = String::with_capacity(mask.len() * 2);
    for (i, c) in mask.iter().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(*c);
    }
    result
}

/// Render guessed letters as a comma separated list
#[must_use]
pub fn format_guessed(letters: &[char]) -> String {
    if letters.is_empty() {
        return "none yet".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a lives bar: one full heart per remaining life, hollow ones for lives lost
///
/// More than `MAX_LIVES` lives are shown as a count instead of one glyph each.
#[must_use]
pub fn lives_bar(remaining: u32, total: u32) -> String {
    if total > MAX_LIVES {
        return format!("♥×{}", remaining.min(total));
    }

    let remaining = remaining.min(total) as usize;
    let lost = total as usize - remaining;

    format!("{}{}", "♥".repeat(remaining), "♡".repeat(lost))
}

/// Percentage of lives left, clamped to 0..=100
#[must_use]
pub fn lives_percent(remaining: u32, total: u32) -> u16 {
    if total == 0 {
        return 0;
    }
    (u64::from(remaining.min(total)) * 100 / u64::from(total)) as u16
}
