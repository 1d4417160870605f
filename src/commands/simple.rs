//! Simple line-based game mode
//!
//! Reads one guess per line, validates it, applies it and prints the outcome. After each
//! round the player decides whether to keep going.

use crate::core::{GameState, InvalidGuess, Statistics, WordPicker, normalize_letter};
use crate::output::{
    print_banner, print_outcome, print_rejection, print_round_result, print_round_start,
    print_statistics,
};
use anyhow::{Context, Result};
use log::debug;
use std::io::{BufRead, Write};

/// Run the line-based game until the player stops or input ends
///
/// After a win the next word is played with the lives that remain. After a loss the game
/// restarts with the starting number of lives.
///
/// # Errors
///
/// Returns an error on I/O failure, or if a new round cannot be started.
pub fn run_simple<P, R, W>(
    game: &mut GameState<P>,
    mut input: R,
    mut output: W,
) -> Result<Statistics>
where
    P: WordPicker,
    R: BufRead,
    W: Write,
{
    let mut stats = Statistics::default();

    print_banner(&mut output)?;
    print_round_start(&mut output, game)?;

    while let Some(line) = get_user_input(&mut input, &mut output, "Guess a letter")? {
        // Pre-filter before touching the game state
        let letter = match normalize_letter(&line) {
            Ok(letter) if game.has_guessed(letter) => {
                print_rejection(&mut output, &InvalidGuess::AlreadyGuessed(letter))?;
                continue;
            }
            Ok(letter) => letter,
            Err(e) => {
                print_rejection(&mut output, &e)?;
                continue;
            }
        };

        let outcome = match game.submit_guess(&line) {
            Ok(outcome) => outcome,
            Err(e) => {
                print_rejection(&mut output, &e)?;
                continue;
            }
        };
        print_outcome(&mut output, letter, outcome, game)?;

        if !game.is_round_over() {
            continue;
        }

        let won = game.is_won();
        print_round_result(&mut output, game)?;
        stats.record(won);
        debug!(
            "round finished (won: {won}), {} of {} won",
            stats.rounds_won, stats.rounds_played
        );

        let prompt = if won {
            "Next word? (yes/no)"
        } else {
            "Play again? (yes/no)"
        };
        let again = get_user_input(&mut input, &mut output, prompt)?
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "yes" | "y"));
        if !again {
            break;
        }

        if won {
            game.pick_new_word().context("failed to pick the next word")?;
        } else {
            game.restart().context("failed to restart the game")?;
        }
        print_round_start(&mut output, game)?;
    }

    print_statistics(&mut output, &stats)?;
    writeln!(output, "\n👋 Thanks for playing!\n")?;

    Ok(stats)
}

/// Get user input with a prompt
///
/// Returns `None` at end of input. Only the line terminator is stripped.
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
