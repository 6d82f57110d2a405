//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterState, Word};
use colored::Colorize;

/// Format an evaluation as an emoji string
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    evaluation
        .iter()
        .map(|state| match state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            LetterState::Absent => '⬜',
        })
        .collect()
}

/// Render a guess as colored letter tiles
///
/// Green for correct, yellow for present, dim for absent.
#[must_use]
pub fn colored_guess_row(guess: &Word, evaluation: &Evaluation) -> String {
    guess
        .text()
        .chars()
        .zip(evaluation.iter())
        .map(|(letter, state)| {
            let tile = format!(" {letter} ");
            match state {
                LetterState::Correct => tile.black().on_green().bold().to_string(),
                LetterState::Present => tile.black().on_yellow().bold().to_string(),
                LetterState::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(guess: &str, answer: &str) -> (Word, Evaluation) {
        let g = Word::new(guess).unwrap();
        let a = Word::new(answer).unwrap();
        let e = Evaluation::of(&g, &a);
        (g, e)
    }

    #[test]
    fn emoji_all_green() {
        let (_, e) = eval("crane", "crane");
        assert_eq!(evaluation_to_emoji(&e), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_all_gray() {
        let (_, e) = eval("abcde", "fghij");
        assert_eq!(evaluation_to_emoji(&e), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_mixed() {
        let (_, e) = eval("speed", "erase");
        assert_eq!(evaluation_to_emoji(&e), "🟨⬜🟨🟨⬜");
    }

    #[test]
    fn colored_row_contains_every_letter() {
        let (g, e) = eval("crane", "slate");
        let row = colored_guess_row(&g, &e);
        for letter in ['C', 'R', 'A', 'N', 'E'] {
            assert!(row.contains(letter), "missing {letter} in row");
        }
    }
}
