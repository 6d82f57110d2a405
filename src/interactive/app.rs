//! TUI application state and logic

use crate::core::Word;
use crate::session::{AnswerProvider, GameSession, SessionStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, P: AnswerProvider> {
    provider: &'a P,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub total_guesses: usize,
}

impl<'a, P: AnswerProvider> App<'a, P> {
    /// Start the first game through the provider
    #[must_use]
    pub fn new(provider: &'a P) -> Self {
        let session = GameSession::from_provider(provider);

        let mut app = Self {
            provider,
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };

        match app.session.status() {
            SessionStatus::Error => {
                app.add_message(
                    "Could not load an answer word. Press 'r' to retry or 'q' to quit.",
                    MessageStyle::Error,
                );
            }
            _ => {
                let length = app.session.answer_length().unwrap_or(0);
                app.add_message(
                    &format!("Welcome! Type a {length}-letter word and press Enter."),
                    MessageStyle::Info,
                );
            }
        }

        app
    }

    /// Add a typed letter to the input buffer
    ///
    /// Uppercased on entry; non-letters and overflow beyond the answer
    /// length are dropped.
    pub fn push_letter(&mut self, c: char) {
        let Some(length) = self.session.answer_length() else {
            return;
        };
        if c.is_ascii_alphabetic() && self.input_buffer.len() < length {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the input buffer as a guess
    ///
    /// The buffer is cleared whether or not the guess is accepted.
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let Some(length) = self.session.answer_length() else {
            return;
        };

        if input.len() != length {
            self.add_message(
                &format!("Guesses must be {length} letters."),
                MessageStyle::Error,
            );
            return;
        }

        let Ok(guess) = Word::new(&input) else {
            self.add_message("Letters only, please.", MessageStyle::Error);
            return;
        };

        if self.session.has_guess(&guess) {
            self.add_message(
                &format!("You already tried {guess}."),
                MessageStyle::Error,
            );
            return;
        }

        self.session.submit_guess(&guess);

        if self.session.status() == SessionStatus::Won {
            let turns = self.session.guesses().len();
            self.stats.games_played += 1;
            self.stats.games_won += 1;
            self.stats.total_guesses += turns;

            let celebration = match turns {
                1 => "🎯 HOLE IN ONE! Extraordinary!",
                2 => "🔥 MAGNIFICENT! Two guesses!",
                3 => "✨ SPLENDID! Three guesses!",
                4 => "👏 GREAT JOB! Four guesses!",
                5 => "🎉 NICE WORK! Five guesses!",
                _ => "🎊 SOLVED!",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    /// Abandon the current game and fetch a fresh answer
    pub fn new_game(&mut self) {
        self.session.reset();
        self.session = GameSession::from_provider(self.provider);
        self.input_buffer.clear();
        self.messages.clear();

        match self.session.status() {
            SessionStatus::Error => {
                self.add_message(
                    "Could not load an answer word. Press 'r' to retry or 'q' to quit.",
                    MessageStyle::Error,
                );
            }
            _ => {
                let length = self.session.answer_length().unwrap_or(0);
                self.add_message(
                    &format!("New game! Type a {length}-letter word."),
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<P: AnswerProvider>(app: App<P>) -> Result<()> {
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, P: AnswerProvider>(
    terminal: &mut Terminal<B>,
    mut app: App<P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.session.status() {
                    SessionStatus::Won => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game(),
                        _ => {}
                    },
                    SessionStatus::Error | SessionStatus::Loading => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('r') => app.new_game(),
                        _ => {}
                    },
                    SessionStatus::InProgress => match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.new_game();
                        }
                        KeyCode::Char(c) => app.push_letter(c),
                        KeyCode::Backspace => app.pop_letter(),
                        KeyCode::Enter => app.submit(),
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
