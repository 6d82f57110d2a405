//! Wordle Game
//!
//! A Wordle-style word guessing game built around a multiset-correct
//! guess evaluator and an explicit session state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Evaluation, LetterState, Word};
//! use wordle_game::session::GameSession;
//!
//! let answer = Word::new("crane").unwrap();
//! let guess = Word::new("slate").unwrap();
//!
//! // Score a single guess
//! let eval = Evaluation::of(&guess, &answer);
//! assert_eq!(eval.states()[2], LetterState::Correct); // A
//!
//! // Or drive a full session
//! let mut session = GameSession::new();
//! session.set_answer(answer);
//! session.submit_guess(&guess);
//! assert_eq!(session.guesses().len(), 1);
//! ```

// Core domain types
pub mod core;

// Game session state machine and answer providers
pub mod session;

// Debounced contact lookup (autocomplete collaborator)
pub mod lookup;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Logging setup
pub mod logging;
