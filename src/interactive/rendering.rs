//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{Evaluation, LetterState, Word};
use crate::session::{AnswerProvider, SessionStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<P: AnswerProvider>(f: &mut Frame, app: &App<P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Input
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn tile_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn guess_line(word: &Word, eval: &Evaluation) -> Line<'static> {
    let mut spans = Vec::with_capacity(word.len() * 2);
    for (letter, state) in word.text().chars().zip(eval.iter()) {
        spans.push(Span::styled(format!(" {letter} "), tile_style(state)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<P: AnswerProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (word, eval) in app.session.evaluated_history() {
        lines.push(guess_line(&word, &eval));
        lines.push(Line::from(""));
    }

    if app.session.status() == SessionStatus::Error {
        lines.push(Line::from(Span::styled(
            "  Answer unavailable - press 'r' to retry",
            Style::default().fg(Color::Red),
        )));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages<P: AnswerProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
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

    let list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input<P: AnswerProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let length = app.session.answer_length().unwrap_or(0);

    // Typed letters followed by placeholder slots
    let mut shown = String::with_capacity(length * 2);
    for c in app.input_buffer.chars() {
        shown.push(c);
        shown.push(' ');
    }
    for _ in app.input_buffer.len()..length {
        shown.push('_');
        shown.push(' ');
    }

    let (title, color) = match app.session.status() {
        SessionStatus::Won => (" 🎉 You won! 'n' = new game, 'q' = quit ", Color::Green),
        SessionStatus::Error | SessionStatus::Loading => {
            (" 'r' = retry, 'q' = quit ", Color::Red)
        }
        SessionStatus::InProgress => (" Type your guess, Enter to submit ", Color::Yellow),
    };

    let input = Paragraph::new(shown)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status<P: AnswerProvider>(f: &mut Frame, app: &App<P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let status_text = match app.session.status() {
        SessionStatus::Loading => "Loading...",
        SessionStatus::Error => "Load failed",
        SessionStatus::InProgress => "In progress",
        SessionStatus::Won => "Won!",
    };
    let status = Paragraph::new(format!("Status: {status_text}")).alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {} | Guesses: {}",
        app.stats.games_played, app.stats.games_won, app.stats.total_guesses
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
