//! Line-based game loop
//!
//! Plays full games over any `BufRead`, so tests drive it with a string
//! cursor instead of a terminal.

use crate::core::Word;
use crate::output::formatters::{colored_guess_row, evaluation_to_emoji};
use crate::output::print_win_banner;
use crate::session::{AnswerProvider, GameSession, SessionStatus};
use std::io::BufRead;

/// Run the line-mode game against the given answer provider
///
/// Commands: `exit`/`quit` to stop, `new` to start a fresh game. Everything
/// else is treated as a guess, uppercased, validated for length, and
/// submitted. The input buffer is discarded every round regardless of
/// whether the guess was accepted.
///
/// # Errors
///
/// Returns an error if the provider cannot produce an answer or input cannot
/// be read.
pub fn run_play<P: AnswerProvider, R: BufRead>(provider: &P, mut reader: R) -> Result<(), String> {
    let mut session = start_session(provider)?;

    let length = session.answer_length().unwrap_or(0);
    println!("\nI picked a {length}-letter word. Guess it!");
    println!("Commands: 'exit' to quit, 'new' for a new word\n");

    loop {
        let mut input = String::new();
        let read = reader
            .read_line(&mut input)
            .map_err(|e| format!("Failed to read input: {e}"))?;
        if read == 0 {
            // EOF
            return Ok(());
        }

        let input = input.trim().to_uppercase();
        match input.as_str() {
            "" => continue,
            "EXIT" | "QUIT" => {
                println!("Thanks for playing!");
                return Ok(());
            }
            "NEW" => {
                session = start_session(provider)?;
                let length = session.answer_length().unwrap_or(0);
                println!("\nNew game! I picked a {length}-letter word.\n");
                continue;
            }
            _ => {}
        }

        if session.status() == SessionStatus::Won {
            println!("Game over - type 'new' for another word or 'exit' to quit.");
            continue;
        }

        let Ok(guess) = Word::new(&input) else {
            println!("Letters only, please.");
            continue;
        };

        if Some(guess.len()) != session.answer_length() {
            let length = session.answer_length().unwrap_or(0);
            println!("Your guess must be {length} letters.");
            continue;
        }

        if session.has_guess(&guess) {
            println!("You already tried {guess}.");
            continue;
        }

        session.submit_guess(&guess);

        let history = session.evaluated_history();
        if let Some((word, eval)) = history.last() {
            println!(
                "{}  {}",
                colored_guess_row(word, eval),
                evaluation_to_emoji(eval)
            );
        }

        if session.status() == SessionStatus::Won {
            print_win_banner(&history);
            println!("\nType 'new' for another word or 'exit' to quit.\n");
        }
    }
}

fn start_session<P: AnswerProvider>(provider: &P) -> Result<GameSession, String> {
    let session = GameSession::from_provider(provider);
    match session.status() {
        SessionStatus::Error => Err("Could not load an answer word".to_string()),
        _ => Ok(session),
    }
}
