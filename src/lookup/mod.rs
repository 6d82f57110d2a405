//! Debounced contact lookup
//!
//! Autocomplete collaborator: raw text goes in, and only after the input has
//! been quiet for a configured interval does a single directory search fire.
//! Stale pending queries are dropped when the input changes again. The UI
//! reads three fields back: results, loading, and error.
//!
//! Time is an explicit parameter (monotonic ticks), so the debounce is fully
//! deterministic under test. No timers, no threads.

mod contact;
mod debounce;

pub use contact::{Contact, ContactDirectory, LookupError, StaticDirectory};
pub use debounce::{DEFAULT_QUIET_INTERVAL, DebouncedLookup};
