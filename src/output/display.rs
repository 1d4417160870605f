//! Display functions for the line-based game

use super::formatters::{format_guessed, lives_bar};
use super::messages::{outcome_lines, progress_line, rejection_message, round_result_line};
use crate::core::{GameState, GuessOutcome, InvalidGuess, Statistics, WordPicker};
use colored::Colorize;
use std::io::{self, Write};

/// Print the welcome banner and the starting mask
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, "{}", "                      H A N G M A N".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "\nGuess the word one letter at a time.")?;
    writeln!(out, "Every wrong letter costs a life.\n")
}

/// Print the state at the start of a round
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_round_start<W: Write, P: WordPicker>(
    out: &mut W,
    game: &GameState<P>,
) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "New word: {} letters | Lives: {}",
        game.secret_word().len(),
        lives_bar(game.remaining_lives(), game.starting_lives()).red()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "{}", progress_line(game.reveal_mask()))
}

/// Print what an accepted guess did, then the updated mask
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write, P: WordPicker>(
    out: &mut W,
    letter: char,
    outcome: GuessOutcome,
    game: &GameState<P>,
) -> io::Result<()> {
    for line in outcome_lines(letter, outcome, game.remaining_lives()) {
        match outcome {
            GuessOutcome::Correct => writeln!(out, "{}", line.green())?,
            GuessOutcome::Incorrect => writeln!(out, "{}", line.yellow())?,
        }
    }
    writeln!(out, "{}", progress_line(game.reveal_mask()))?;
    writeln!(
        out,
        "{}",
        format!("Guessed: {}", format_guessed(game.guessed_letters())).bright_black()
    )
}

/// Print why a guess was rejected
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_rejection<W: Write>(out: &mut W, error: &InvalidGuess) -> io::Result<()> {
    writeln!(out, "{}", rejection_message(error).red())
}

/// Print the win or loss line of a finished round
///
/// Prints nothing while the round is still in progress.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_round_result<W: Write, P: WordPicker>(
    out: &mut W,
    game: &GameState<P>,
) -> io::Result<()> {
    let Some(line) = round_result_line(game) else {
        return Ok(());
    };

    if game.is_won() {
        writeln!(out, "\n{}", format!("🎉 {line}").bright_green().bold())
    } else {
        writeln!(out, "\n{}", format!("💀 {line}").red().bold())
    }
}

/// Print session statistics
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "SESSION".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, "   Rounds played:  {}", stats.rounds_played)?;
    writeln!(out, "   Rounds won:     {}", stats.rounds_won)?;
    writeln!(
        out,
        "   Win rate:       {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedPicker, Word};

    fn game(word: &str, lives: u32) -> GameState<ScriptedPicker> {
        GameState::new(vec![Word::new(word).unwrap()], lives, ScriptedPicker::first()).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn outcome_shows_message_and_mask() {
        let mut game = game("apple", 5);
        let outcome = game.submit_guess("p").unwrap();

        let text = render(|out| print_outcome(out, 'p', outcome, &game));
        assert!(text.contains("Good guess! p is in the word."));
        assert!(text.contains("Word guessed so far: _ p p _ _"));
    }

    #[test]
    fn incorrect_outcome_shows_lives() {
        let mut game = game("apple", 5);
        let outcome = game.submit_guess("z").unwrap();

        let text = render(|out| print_outcome(out, 'z', outcome, &game));
        assert!(text.contains("Sorry, z is not in the word."));
        assert!(text.contains("You have 4 lives left."));
    }

    #[test]
    fn round_result_only_when_over() {
        let mut game = game("go", 1);
        assert!(render(|out| print_round_result(out, &game)).is_empty());

        game.submit_guess("x").unwrap();
        let text = render(|out| print_round_result(out, &game));
        assert!(text.contains("You lost! The word was go."));
    }

    #[test]
    fn statistics_table() {
        let mut stats = Statistics::default();
        stats.record(true);
        stats.record(false);

        let text = render(|out| print_statistics(out, &stats));
        assert!(text.contains("Rounds played:  2"));
        assert!(text.contains("Rounds won:     1"));
    }
}
