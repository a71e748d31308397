//! TUI rendering with ratatui

use super::app::App;
use crate::core::Outcome;
use crate::game::board::{self, Row};
use crate::game::{KeyboardFeedback, NoticeKind};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::wordlists::WordPicker;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Notice
            Constraint::Length(6), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, now, chunks[1]);
    render_notice(f, app, chunks[2]);
    render_keyboard(f, app.controller.session().keyboard(), chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Tile colors shared by the board and the keyboard
fn outcome_style(outcome: Outcome) -> Style {
    match outcome {
        Outcome::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Outcome::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Outcome::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        Outcome::Invalid => Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        Outcome::Current => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::UNDERLINED),
        Outcome::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Hádej slovo")
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

fn board_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let letter = cell.letter.unwrap_or('·');
        spans.push(Span::styled(format!(" {letter} "), outcome_style(cell.outcome)));
    }
    Line::from(spans)
}

fn render_board<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, now: Instant, area: Rect) {
    let session = app.controller.session();
    let lines: Vec<Line> = board::rows(session, app.controller.is_invalid(now))
        .iter()
        .map(board_line)
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn render_notice<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let (text, style) = match app.controller.notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => Color::White,
                NoticeKind::Success => Color::Green,
                NoticeKind::Failure | NoticeKind::Error => Color::Red,
            };
            (
                notice.text.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => ("", Style::default()),
    };

    let notice = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    f.render_widget(notice, area);
}

fn key_span(key: char, keyboard: &KeyboardFeedback) -> Span<'static> {
    let style = keyboard
        .get(key)
        .map_or_else(|| Style::default().fg(Color::White), outcome_style);
    Span::styled(format!(" {key} "), style)
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardFeedback, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans: Vec<Span> = row.chars().map(|key| key_span(key, keyboard)).collect();
            // Action keys flank the last Latin row
            if i == 2 {
                spans.insert(0, Span::styled("ENTER ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(" DEL", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    let keys = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keys, area);
}

fn render_status<P: WordPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let session = app.controller.session();
    let guess_text = format!("Guess: {}/{}", session.history().len(), session.max_guesses());
    let guesses = Paragraph::new(guess_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[1]);

    let help_text = if session.status().is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Ctrl-N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
