//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_lookup_outcome, print_score_result, print_win_banner};
pub use formatters::{colored_guess_row, evaluation_to_emoji};
