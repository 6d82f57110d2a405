//! Answer providers
//!
//! The session never fetches its own answer; it receives one from whatever
//! implements [`AnswerProvider`]. The game binary plugs in a random pick over
//! a word list, tests plug in a fixed word.

use crate::core::Word;
use rand::seq::IndexedRandom;
use std::fmt;

/// Error type for answer resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider's word pool is empty
    NoWordsAvailable,
    /// The provider's backing source failed
    SourceFailed(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsAvailable => write!(f, "No answer words available"),
            Self::SourceFailed(reason) => write!(f, "Answer source failed: {reason}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Source of the session answer
pub trait AnswerProvider {
    /// Resolve one answer word
    ///
    /// # Errors
    /// Returns `ProviderError` when no answer can be produced. The caller maps
    /// this to [`SessionStatus::Error`](crate::session::SessionStatus::Error).
    fn fetch_answer(&self) -> Result<Word, ProviderError>;
}

/// Uniform random pick from a word slice
///
/// Mirrors the production setup where a fetched word list yields one random
/// answer per game.
pub struct RandomWordProvider<'a> {
    words: &'a [Word],
}

impl<'a> RandomWordProvider<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }
}

impl AnswerProvider for RandomWordProvider<'_> {
    fn fetch_answer(&self) -> Result<Word, ProviderError> {
        let mut rng = rand::rng();
        self.words
            .choose(&mut rng)
            .cloned()
            .ok_or(ProviderError::NoWordsAvailable)
    }
}

/// Always returns the same word
///
/// Deterministic sessions for tests and scripted play.
pub struct FixedWordProvider {
    word: Word,
}

impl FixedWordProvider {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self { word }
    }
}

impl AnswerProvider for FixedWordProvider {
    fn fetch_answer(&self) -> Result<Word, ProviderError> {
        Ok(self.word.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_provider_picks_from_pool() {
        let words = vec![
            Word::new("crane").unwrap(),
            Word::new("slate").unwrap(),
            Word::new("irate").unwrap(),
        ];
        let provider = RandomWordProvider::new(&words);

        for _ in 0..20 {
            let picked = provider.fetch_answer().unwrap();
            assert!(words.contains(&picked));
        }
    }

    #[test]
    fn random_provider_empty_pool_errors() {
        let provider = RandomWordProvider::new(&[]);
        assert_eq!(
            provider.fetch_answer(),
            Err(ProviderError::NoWordsAvailable)
        );
    }

    #[test]
    fn fixed_provider_is_deterministic() {
        let provider = FixedWordProvider::new(Word::new("crane").unwrap());
        for _ in 0..5 {
            assert_eq!(provider.fetch_answer().unwrap().text(), "CRANE");
        }
    }

    #[test]
    fn provider_error_display() {
        assert_eq!(
            ProviderError::NoWordsAvailable.to_string(),
            "No answer words available"
        );
        assert_eq!(
            ProviderError::SourceFailed("timeout".to_string()).to_string(),
            "Answer source failed: timeout"
        );
    }
}
