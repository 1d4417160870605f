//! TUI application state and logic

use crate::core::{GameState, RandomPicker, Statistics, WordPicker};
use crate::output::messages::{outcome_lines, rejection_message, round_result_line};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<P: WordPicker = RandomPicker> {
    pub game: GameState<P>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<P: WordPicker> App<P> {
    #[must_use]
    pub fn new(game: GameState<P>) -> Self {
        let input_mode = if game.is_round_over() {
            InputMode::RoundOver
        } else {
            InputMode::Guessing
        };

        Self {
            game,
            messages: vec![
                Message {
                    text: "Welcome! Guess the word one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter to guess it.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode,
        }
    }

    /// Apply a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Chorded keys like Ctrl-A are never guesses
        let plain = key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT;

        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (_, KeyCode::Esc) | (InputMode::RoundOver, KeyCode::Char('q')) => {
                self.should_quit = true;
            }
            (InputMode::RoundOver, KeyCode::Char('n')) => self.next_round(),
            (InputMode::Guessing, KeyCode::Char(c)) if plain => self.handle_guess(c),
            _ => {}
        }
    }

    /// Submit a typed character as a guess
    pub fn handle_guess(&mut self, c: char) {
        if self.input_mode != InputMode::Guessing {
            return;
        }

        match self.game.submit_guess(&c.to_string()) {
            Ok(outcome) => {
                let letter = self.game.guessed_letters().last().copied().unwrap_or(c);
                let style = if outcome.is_correct() {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                for line in outcome_lines(letter, outcome, self.game.remaining_lives()) {
                    self.add_message(&line, style);
                }

                if self.game.is_round_over() {
                    self.finish_round();
                }
            }
            Err(e) => self.add_message(rejection_message(&e), MessageStyle::Error),
        }
    }

    fn finish_round(&mut self) {
        let won = self.game.is_won();
        self.stats.record(won);
        self.input_mode = InputMode::RoundOver;

        if let Some(line) = round_result_line(&self.game) {
            let style = if won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&line, style);
        }

        let action = if won { "next word" } else { "new game" };
        self.add_message(
            &format!("Press 'n' for {action} or 'q' to quit."),
            MessageStyle::Info,
        );
    }

    /// Start the next round
    ///
    /// Continues with the remaining lives after a win, restarts after a loss.
    pub fn next_round(&mut self) {
        let won = self.game.is_won();
        let result = if won {
            self.game.pick_new_word().map(|_| ())
        } else {
            self.game.restart().map(|_| ())
        };

        match result {
            Ok(()) => {
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                let text = if won {
                    format!(
                        "Next word! You carry {} lives into it.",
                        self.game.remaining_lives()
                    )
                } else {
                    "New game started!".to_string()
                };
                self.add_message(&text, MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only the most recent messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordPicker>(app: App<P>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, P: WordPicker>(
    terminal: &mut Terminal<B>,
    mut app: App<P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    debug!(
        "leaving TUI after {} rounds ({} won)",
        app.stats.rounds_played, app.stats.rounds_won
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedPicker, Word};

    fn app(list: &[&str], lives: u32) -> App<ScriptedPicker> {
        let words = list.iter().map(|w| Word::new(*w).unwrap()).collect();
        let indices = (0..list.len()).collect();
        let game = GameState::new(words, lives, ScriptedPicker::new(indices)).unwrap();
        App::new(game)
    }

    fn last_message(app: &App<ScriptedPicker>) -> &str {
        &app.messages.last().unwrap().text
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn plain_and_shifted_letters_guess() {
        let mut app = app(&["apple"], 5);
        app.handle_key(key(KeyCode::Char('p'), KeyModifiers::NONE));
        app.handle_key(key(KeyCode::Char('A'), KeyModifiers::SHIFT));

        assert_eq!(app.game.guessed_letters(), &['p', 'a']);
    }

    #[test]
    fn chorded_letters_are_ignored() {
        let mut app = app(&["apple"], 5);
        app.handle_key(key(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(key(KeyCode::Char('z'), KeyModifiers::ALT));
        app.handle_key(key(
            KeyCode::Char('Z'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));

        assert!(app.game.guessed_letters().is_empty());
        assert_eq!(app.game.remaining_lives(), 5);
        assert!(!app.should_quit);
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let mut ctrl_c = app(&["apple"], 5);
        ctrl_c.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.should_quit);
        assert!(ctrl_c.game.guessed_letters().is_empty());

        let mut esc = app(&["apple"], 5);
        esc.handle_key(key(KeyCode::Esc, KeyModifiers::NONE));
        assert!(esc.should_quit);
    }

    #[test]
    fn round_over_keys() {
        let mut app = app(&["go"], 1);
        app.handle_key(key(KeyCode::Char('z'), KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::RoundOver);

        app.handle_key(key(KeyCode::Char('n'), KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.game.guessed_letters().is_empty());
    }

    #[test]
    fn starts_guessing() {
        let app = app(&["apple"], 5);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.messages.len(), 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn correct_guess_adds_success_message() {
        let mut app = app(&["apple"], 5);
        app.handle_guess('P');

        assert_eq!(app.game.reveal_mask(), &['_', 'p', 'p', '_', '_']);
        assert_eq!(last_message(&app), "Good guess! p is in the word.");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn incorrect_guess_reports_lives() {
        let mut app = app(&["apple"], 5);
        app.handle_guess('z');

        assert_eq!(app.game.remaining_lives(), 4);
        assert_eq!(last_message(&app), "You have 4 lives left.");
    }

    #[test]
    fn rejected_guess_shows_error() {
        let mut app = app(&["apple"], 5);
        app.handle_guess('3');
        assert_eq!(
            last_message(&app),
            "Invalid letter. Please, enter a single alphabetical character."
        );

        app.handle_guess('p');
        app.handle_guess('p');
        assert_eq!(last_message(&app), "You already tried that letter!");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(&["apple"], 20);
        for c in ['b', 'c', 'd', 'f', 'g', 'h'] {
            app.handle_guess(c);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
    }

    #[test]
    fn win_moves_to_round_over() {
        let mut app = app(&["go", "apple"], 5);
        app.handle_guess('g');
        app.handle_guess('o');

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_won, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Congratulations. You won the game!")
        );

        // Guesses are ignored until the next round
        app.handle_guess('a');
        assert_eq!(app.game.guessed_letters(), &['g', 'o']);
    }

    #[test]
    fn next_round_after_win_keeps_lives() {
        let mut app = app(&["go", "apple"], 5);
        app.handle_guess('x');
        app.handle_guess('g');
        app.handle_guess('o');
        app.next_round();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.secret_word().text(), "apple");
        assert_eq!(app.game.remaining_lives(), 4);
    }

    #[test]
    fn next_round_after_loss_restarts() {
        let mut app = app(&["go"], 1);
        app.handle_guess('z');
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_won, 0);

        app.next_round();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.remaining_lives(), 1);
        assert_eq!(last_message(&app), "New game started!");
    }
}
