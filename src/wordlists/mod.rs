//! Word lists for the game
//!
//! Provides the embedded answer pool plus loading from custom files.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
