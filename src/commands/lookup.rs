//! Lookup demo command
//!
//! Runs one query through the debounced lookup against a directory,
//! advancing the virtual clock past the quiet interval so the search fires.

use crate::lookup::{Contact, ContactDirectory, DEFAULT_QUIET_INTERVAL, DebouncedLookup};

/// What the lookup surfaced for one query
pub struct LookupOutcome {
    pub results: Vec<Contact>,
    pub error: Option<String>,
}

/// Search `directory` for `query` through the debounce layer
pub fn run_lookup<D: ContactDirectory>(directory: D, query: &str) -> LookupOutcome {
    let mut lookup = DebouncedLookup::new(directory);
    lookup.set_input(query, 0);
    lookup.poll(DEFAULT_QUIET_INTERVAL);

    LookupOutcome {
        results: lookup.results().to_vec(),
        error: lookup.error().map(str::to_string),
    }
}
