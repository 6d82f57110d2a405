//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond hashing. All types here are pure, testable, and have clear mathematical
//! properties.

mod evaluate;
mod word;

pub use evaluate::{Evaluation, LetterState};
pub use word::{Word, WordError};
