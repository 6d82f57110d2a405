//! Game session state machine

use super::provider::AnswerProvider;
use crate::core::{Evaluation, Word};
use rustc_hash::FxHashSet;

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Answer not yet available
    Loading,
    /// Answer fetch failed; terminal until `reset`
    Error,
    /// Answer installed, accepting guesses
    InProgress,
    /// A guess matched the answer; history is frozen
    Won,
}

/// One game: the answer, the accepted guesses, and the status
///
/// Invalid submissions (wrong status, wrong length, repeated guess) are
/// silently ignored rather than surfaced as errors: they are ordinary user
/// input, and the UI pre-validates with [`has_guess`](Self::has_guess) and
/// [`answer_length`](Self::answer_length) instead of handling a failure
/// channel.
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Option<Word>,
    guesses: Vec<Word>,
    guessed: FxHashSet<Word>,
    status: SessionStatus,
}

impl GameSession {
    /// Create a session waiting for its answer
    #[must_use]
    pub fn new() -> Self {
        Self {
            answer: None,
            guesses: Vec::new(),
            guessed: FxHashSet::default(),
            status: SessionStatus::Loading,
        }
    }

    /// Create a session and resolve its answer through `provider`
    ///
    /// A provider failure leaves the session in [`SessionStatus::Error`];
    /// nothing is retried here.
    pub fn from_provider<P: AnswerProvider>(provider: &P) -> Self {
        let mut session = Self::new();
        match provider.fetch_answer() {
            Ok(word) => {
                log::debug!("answer resolved ({} letters)", word.len());
                session.set_answer(word);
            }
            Err(e) => {
                log::warn!("answer fetch failed: {e}");
                session.fail_load();
            }
        }
        session
    }

    /// Install the answer and start accepting guesses
    ///
    /// Only honored while Loading. A stale fetch arriving after the session
    /// has moved on is ignored, never an error; the same applies after a
    /// failed load (Error stays terminal until [`reset`](Self::reset)).
    pub fn set_answer(&mut self, answer: Word) {
        if self.status != SessionStatus::Loading {
            return;
        }
        self.answer = Some(answer);
        self.status = SessionStatus::InProgress;
    }

    /// Record that the answer fetch failed
    ///
    /// Only meaningful while Loading; ignored otherwise.
    pub fn fail_load(&mut self) {
        if self.status == SessionStatus::Loading {
            self.status = SessionStatus::Error;
        }
    }

    /// Return to Loading with an empty history
    ///
    /// The only way out of Error, and the re-entry point for a new game.
    pub fn reset(&mut self) {
        self.answer = None;
        self.guesses.clear();
        self.guessed.clear();
        self.status = SessionStatus::Loading;
    }

    /// Submit a guess
    ///
    /// Silently ignored unless the session is InProgress, the guess length
    /// matches the answer, and the guess has not been submitted before.
    /// An accepted guess equal to the answer transitions to Won, after which
    /// the history is frozen.
    pub fn submit_guess(&mut self, guess: &Word) {
        if self.status != SessionStatus::InProgress {
            return;
        }

        let Some(answer) = &self.answer else {
            return;
        };

        if guess.len() != answer.len() || self.guessed.contains(guess) {
            return;
        }

        if guess == answer {
            self.status = SessionStatus::Won;
        }

        self.guesses.push(guess.clone());
        self.guessed.insert(guess.clone());
    }

    /// O(1) check whether `guess` was already accepted
    #[must_use]
    pub fn has_guess(&self, guess: &Word) -> bool {
        self.guessed.contains(guess)
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Guess history paired with evaluations
    ///
    /// Recomputed from the authoritative history and answer on every call, so
    /// it can never drift out of sync with them. Empty while no answer is
    /// installed.
    #[must_use]
    pub fn evaluated_history(&self) -> Vec<(Word, Evaluation)> {
        let Some(answer) = &self.answer else {
            return Vec::new();
        };

        self.guesses
            .iter()
            .map(|guess| (guess.clone(), Evaluation::of(guess, answer)))
            .collect()
    }

    /// Current lifecycle status
    #[inline]
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The answer, once installed
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    /// Required guess length, once the answer is installed
    ///
    /// UI layers use this to pre-validate input length before submitting.
    #[must_use]
    pub fn answer_length(&self) -> Option<usize> {
        self.answer.as_ref().map(Word::len)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
