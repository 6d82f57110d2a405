//! Display functions for command results

use super::formatters::{colored_guess_row, evaluation_to_emoji};
use crate::commands::{LookupOutcome, ScoreResult};
use crate::core::Word;
use colored::Colorize;

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:  {}   Answer: {}",
        result.guess.text().bright_yellow().bold(),
        result.answer.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\n{}  {}",
        colored_guess_row(&result.guess, &result.evaluation),
        evaluation_to_emoji(&result.evaluation)
    );
    println!("Feedback: {}", result.evaluation.to_feedback_string());

    if result.evaluation.is_perfect() {
        println!("\n{}", "Exact match!".green().bold());
    }
}

/// Print the win celebration for a finished game
pub fn print_win_banner(history: &[(Word, crate::core::Evaluation)]) {
    let turns = history.len();

    println!("\n{}", "═".repeat(50).bright_cyan());
    println!("{}", "  🎉  Y O U   W O N !  🎉  ".bright_green().bold());
    println!("{}", "═".repeat(50).bright_cyan());

    let praise = match turns {
        1 => "Hole in one!",
        2 => "Magnificent!",
        3 => "Splendid!",
        4 => "Great job!",
        5 => "Nice work!",
        _ => "Got there!",
    };
    println!("\n  {}", praise.bright_yellow().bold());
    println!(
        "  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, (word, eval)) in history.iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            word.text().bright_white().bold(),
            evaluation_to_emoji(eval)
        );
    }
    println!("\n{}", "═".repeat(50).bright_cyan());
}

/// Print the outcome of a lookup demo run
pub fn print_lookup_outcome(query: &str, outcome: &LookupOutcome) {
    if let Some(error) = &outcome.error {
        println!("{} {error}", "Lookup failed:".red().bold());
        return;
    }

    if outcome.results.is_empty() {
        println!("No contacts match {}", format!("\"{query}\"").bold());
        return;
    }

    println!(
        "Contacts matching {} ({}):",
        format!("\"{query}\"").bold(),
        outcome.results.len()
    );
    for contact in &outcome.results {
        println!(
            "  • {} {}",
            contact.name.bright_white().bold(),
            format!("<{}>", contact.email).bright_black()
        );
    }
}
