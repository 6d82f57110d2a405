//! Guess evaluation
//!
//! Scores a guess against the answer with one [`LetterState`] per position.
//! Duplicate letters are handled with a multiset budget: each occurrence of a
//! letter in the answer can satisfy at most one guess position, and exact
//! matches claim their letter before any present-elsewhere match competes for
//! the remainder.

use super::Word;

/// Per-letter classification of a guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Letter matches the answer at this exact position
    Correct,
    /// Letter occurs in the answer at another position, with budget remaining
    Present,
    /// Letter is not in the answer, or its occurrences are all claimed
    Absent,
}

impl LetterState {
    /// Single-character feedback form: G / Y / -
    #[inline]
    #[must_use]
    pub const fn feedback_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Positional feedback for one guess against one answer
///
/// Holds one [`LetterState`] per guess position, in guess order.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    states: Vec<LetterState>,
}

impl Evaluation {
    /// Evaluate `guess` against `answer`
    ///
    /// Defined only for equal-length words; the session layer filters length
    /// mismatches before this is reached.
    ///
    /// # Algorithm
    /// 1. Count each answer letter into a budget map.
    /// 2. First pass over all positions: mark exact matches Correct and spend
    ///    one budget unit each. The pass runs to completion so later positions
    ///    see budget already spent by earlier exact matches.
    /// 3. Second pass: remaining positions take Present while their letter has
    ///    budget left, Absent otherwise.
    ///
    /// The result depends only on the two words, never on call history.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, LetterState, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// let eval = Evaluation::of(&guess, &answer);
    ///
    /// // S(present) P(absent) E(present) E(present) D(absent):
    /// // ERASE has two Es, so the third E in the guess gets no budget
    /// assert_eq!(eval.to_feedback_string(), "Y-YY-");
    /// ```
    #[must_use]
    pub fn of(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "caller must match lengths");

        let len = guess.len();
        let mut states = vec![LetterState::Absent; len];
        let mut budget = answer.letter_counts();

        // First pass: exact matches claim their letter
        // Allow: index needed to compare positions and set states[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess.letter_at(i) == answer.letter_at(i) {
                states[i] = LetterState::Correct;

                if let Some(count) = budget.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: spend what remains on present-elsewhere letters
        // Allow: index needed to check and set states[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if states[i] == LetterState::Correct {
                continue;
            }

            if let Some(count) = budget.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                states[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self { states }
    }

    /// Per-position states, aligned with the guess
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.states
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// True when every position is Correct (the guess equals the answer)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.states.is_empty() && self.states.iter().all(|&s| s == LetterState::Correct)
    }

    /// Count positions in a given state
    #[must_use]
    pub fn count_of(&self, state: LetterState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Iterate over the per-position states
    pub fn iter(&self) -> impl Iterator<Item = LetterState> + '_ {
        self.states.iter().copied()
    }

    /// Format as a feedback string like "GY--Y"
    #[must_use]
    pub fn to_feedback_string(&self) -> String {
        self.states
            .iter()
            .map(|s| s.feedback_char())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = LetterState;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, LetterState>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter().copied()
    }
}
