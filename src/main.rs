//! Hangman - CLI
//!
//! Word-guessing game with TUI and line-based modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    core::{DEFAULT_LIVES, GameState, MAX_LIVES, RandomPicker, Word},
    wordlists::{WORDS, loader::words_from_slice},
};
use log::info;
use std::io;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lives at the start of a game (1 to 26)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_LIVES,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_LIVES))
    )]
    lives: u32,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for reproducible word selection
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode
    Simple,
}

/// Load the word list based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    use hangman::wordlists::loader::load_from_file;

    let words = match wordlist {
        "builtin" => words_from_slice(WORDS),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}"))?,
    };

    if words.is_empty() {
        bail!("wordlist '{wordlist}' contains no usable words");
    }

    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    info!("loaded {} words from {}", words.len(), cli.wordlist);

    let picker = cli.seed.map_or_else(RandomPicker::new, RandomPicker::seeded);
    let game = GameState::new(words, cli.lives, picker)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple_command(game),
    }
}

fn run_simple_command(mut game: GameState) -> Result<()> {
    let stdin = io::stdin();
    run_simple(&mut game, stdin.lock(), io::stdout())?;
    Ok(())
}

fn run_play_command(game: GameState) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(game);
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lives_default() {
        let cli = Cli::try_parse_from(["hangman"]).unwrap();
        assert_eq!(cli.lives, DEFAULT_LIVES);
    }

    #[test]
    fn lives_within_bounds() {
        let cli = Cli::try_parse_from(["hangman", "--lives", "26", "simple"]).unwrap();
        assert_eq!(cli.lives, MAX_LIVES);

        let cli = Cli::try_parse_from(["hangman", "simple", "-l", "1"]).unwrap();
        assert_eq!(cli.lives, 1);
    }

    #[test]
    fn lives_out_of_bounds_rejected() {
        for lives in ["0", "27", "4000000000"] {
            assert!(
                Cli::try_parse_from(["hangman", "--lives", lives, "simple"]).is_err(),
                "--lives {lives} should be rejected"
            );
        }
    }
}
