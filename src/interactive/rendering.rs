//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{PLACEHOLDER, WordPicker};
use crate::output::formatters::{format_guessed, format_mask, lives_bar, lives_percent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<P: WordPicker>(f: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word and guesses
            Constraint::Percentage(40), // Lives and messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<P: WordPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Word
            Constraint::Percentage(40), // Guessed letters
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_guessed(f, app, chunks[1]);
}

fn render_word<P: WordPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let game = &app.game;
    let mask = game.reveal_mask();

    let mask_style = if game.is_won() {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(format_mask(mask), mask_style)),
        Line::from(""),
        Line::from(format!(
            "{} letters, {} still hidden",
            mask.len(),
            mask.iter().filter(|&&c| c == PLACEHOLDER).count()
        )),
    ];

    if game.is_lost() {
        content.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                game.secret_word().text().to_uppercase(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_guessed<P: WordPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let game = &app.game;

    let spans: Vec<Span> = if game.guessed_letters().is_empty() {
        vec![Span::raw(format_guessed(&[]))]
    } else {
        game.guessed_letters()
            .iter()
            .flat_map(|&letter| {
                let style = if game.secret_word().has_letter(letter) {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                };
                [Span::styled(letter.to_string(), style), Span::raw(" ")]
            })
            .collect()
    };

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Guessed ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_info_panel<P: WordPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Lives gauge
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_lives(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_lives<P: WordPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let remaining = app.game.remaining_lives();
    let total = app.game.starting_lives().max(remaining);
    let percent = lives_percent(remaining, total);

    let color = match percent {
        0..=25 => Color::Red,
        26..=60 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Lives ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{} {remaining}/{total}", lives_bar(remaining, total)));

    f.render_widget(gauge, area);
}

fn render_messages<P: WordPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt<P: WordPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guessing => (" Type a letter to guess ", Color::Yellow),
        InputMode::RoundOver if app.game.is_won() => {
            (" Solved! | Press 'n' for next word or 'q' to quit ", Color::Green)
        }
        InputMode::RoundOver => (
            " Out of lives | Press 'n' for new game or 'q' to quit ",
            Color::Red,
        ),
    };

    let input = Paragraph::new("").block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status<P: WordPicker>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let rounds_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    let rounds = Paragraph::new(rounds_text).alignment(Alignment::Center);
    f.render_widget(rounds, chunks[0]);

    let words_text = format!("Words: {}", app.game.word_list().len());
    let words = Paragraph::new(words_text).alignment(Alignment::Center);
    f.render_widget(words, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | a-z: Guess",
        InputMode::RoundOver => "q: Quit | n: Next Round",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, ScriptedPicker, Word};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App<ScriptedPicker>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app(word: &str, lives: u32) -> App<ScriptedPicker> {
        let game =
            GameState::new(vec![Word::new(word).unwrap()], lives, ScriptedPicker::first()).unwrap();
        App::new(game)
    }

    #[test]
    fn renders_mask_and_guesses() {
        let mut app = app("apple", 5);
        app.handle_guess('p');

        let text = screen(&app);
        assert!(text.contains("HANGMAN"));
        assert!(text.contains("_ p p _ _"));
        assert!(text.contains("Type a letter to guess"));
    }

    #[test]
    fn renders_secret_after_loss() {
        let mut app = app("go", 1);
        app.handle_guess('z');

        let text = screen(&app);
        assert!(text.contains("The word was GO"));
        assert!(text.contains("Out of lives"));
    }
}
