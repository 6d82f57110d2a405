//! Command implementations

pub mod lookup;
pub mod play;
pub mod score;

pub use lookup::{LookupOutcome, run_lookup};
pub use play::run_play;
pub use score::{ScoreResult, score_guess};
