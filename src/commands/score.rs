//! One-shot guess scoring
//!
//! Evaluates a single guess against a given answer. This command layer owns
//! the length guard: the evaluator itself assumes equal lengths.

use crate::core::{Evaluation, Word};

/// Result of scoring one guess against one answer
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub evaluation: Evaluation,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is invalid or the lengths differ.
pub fn score_guess(guess: &str, answer: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let answer = Word::new(answer).map_err(|e| format!("Invalid answer: {e}"))?;

    if guess.len() != answer.len() {
        return Err(format!(
            "Guess has {} letters but answer has {}",
            guess.len(),
            answer.len()
        ));
    }

    let evaluation = Evaluation::of(&guess, &answer);
    Ok(ScoreResult {
        guess,
        answer,
        evaluation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;

    #[test]
    fn score_valid_pair() {
        let result = score_guess("lolly", "alloy").unwrap();
        assert_eq!(result.evaluation.to_feedback_string(), "YYG-G");
        assert_eq!(result.guess.text(), "LOLLY");
    }

    #[test]
    fn score_perfect_guess() {
        let result = score_guess("crane", "CRANE").unwrap();
        assert!(result.evaluation.is_perfect());
    }

    #[test]
    fn score_length_mismatch_rejected() {
        let err = score_guess("ox", "crane").unwrap_err();
        assert!(err.contains("letters"));
    }

    #[test]
    fn score_invalid_words_rejected() {
        assert!(score_guess("cr4ne", "slate").is_err());
        assert!(score_guess("crane", "").is_err());
    }

    #[test]
    fn score_respects_letter_budget() {
        let result = score_guess("eeeee", "erase").unwrap();
        assert_eq!(result.evaluation.count_of(LetterState::Correct), 2);
        assert_eq!(result.evaluation.count_of(LetterState::Absent), 3);
    }
}
