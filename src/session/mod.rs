//! Game session state machine and answer providers
//!
//! A [`GameSession`] owns one answer and the ordered history of accepted
//! guesses. The answer arrives through an injected [`AnswerProvider`], which
//! keeps the session deterministic under test: pass a fixed provider instead
//! of mocking a network.

mod game;
mod provider;

pub use game::{GameSession, SessionStatus};
pub use provider::{AnswerProvider, FixedWordProvider, ProviderError, RandomWordProvider};
