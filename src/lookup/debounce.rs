//! Debounce wrapper around a contact directory

use super::contact::{Contact, ContactDirectory};

/// Default quiet interval in ticks before a pending query fires
pub const DEFAULT_QUIET_INTERVAL: u64 = 300;

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    due: u64,
}

/// Debounced search over a [`ContactDirectory`]
///
/// Every input edit replaces the single pending query and pushes its deadline
/// out by the quiet interval, so edits made before the deadline invalidate
/// the stale query and at most one search fires per quiet stretch. Searches
/// resolve inside [`poll`](Self::poll), which is why `is_loading` reads false
/// between calls; the field exists because the UI contract exposes it.
///
/// # Examples
/// ```
/// use wordle_game::lookup::{DebouncedLookup, StaticDirectory, DEFAULT_QUIET_INTERVAL};
///
/// let mut lookup = DebouncedLookup::new(StaticDirectory::sample());
/// lookup.set_input("lea", 0);
/// lookup.poll(DEFAULT_QUIET_INTERVAL); // deadline reached, search fires
/// assert_eq!(lookup.results().len(), 1);
/// ```
pub struct DebouncedLookup<D> {
    directory: D,
    quiet_interval: u64,
    pending: Option<Pending>,
    results: Vec<Contact>,
    loading: bool,
    error: Option<String>,
}

impl<D: ContactDirectory> DebouncedLookup<D> {
    /// Wrap `directory` with the default quiet interval
    #[must_use]
    pub fn new(directory: D) -> Self {
        Self::with_quiet_interval(directory, DEFAULT_QUIET_INTERVAL)
    }

    /// Wrap `directory` with a custom quiet interval
    #[must_use]
    pub fn with_quiet_interval(directory: D, quiet_interval: u64) -> Self {
        Self {
            directory,
            quiet_interval,
            pending: None,
            results: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Feed the current input text at time `now`
    ///
    /// Zero-length input clears results and error immediately and drops any
    /// pending query without touching the directory. Anything else becomes
    /// the pending query, due once the input has been quiet for the interval.
    pub fn set_input(&mut self, text: &str, now: u64) {
        if text.is_empty() {
            self.pending = None;
            self.results.clear();
            self.loading = false;
            self.error = None;
            return;
        }

        self.pending = Some(Pending {
            query: text.to_string(),
            due: now + self.quiet_interval,
        });
    }

    /// Advance time to `now`, firing the pending query if its deadline passed
    pub fn poll(&mut self, now: u64) {
        let Some(pending) = self.pending.take_if(|p| p.due <= now) else {
            return;
        };
        log::debug!("lookup dispatch: {:?}", pending.query);

        self.loading = true;
        self.error = None;

        match self.directory.search(&pending.query) {
            Ok(contacts) => {
                self.results = contacts;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
    }

    /// Matches from the most recent completed search
    #[must_use]
    pub fn results(&self) -> &[Contact] {
        &self.results
    }

    /// True while a search is being dispatched
    #[inline]
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed search, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when an edit is waiting out its quiet interval
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupError, StaticDirectory};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Directory fake that counts calls and records the last query
    struct CountingDirectory {
        calls: Rc<Cell<usize>>,
        last_query: Rc<std::cell::RefCell<String>>,
        fail: bool,
    }

    impl CountingDirectory {
        fn new() -> (Self, Rc<Cell<usize>>, Rc<std::cell::RefCell<String>>) {
            let calls = Rc::new(Cell::new(0));
            let last_query = Rc::new(std::cell::RefCell::new(String::new()));
            (
                Self {
                    calls: Rc::clone(&calls),
                    last_query: Rc::clone(&last_query),
                    fail: false,
                },
                calls,
                last_query,
            )
        }
    }

    impl ContactDirectory for CountingDirectory {
        fn search(&self, query: &str) -> Result<Vec<Contact>, LookupError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_query.borrow_mut() = query.to_string();

            if self.fail {
                return Err(LookupError::new("directory offline"));
            }
            Ok(vec![Contact::new("Match", "match@example.com")])
        }
    }

    #[test]
    fn zero_length_input_clears_without_lookup() {
        let (dir, calls, _) = CountingDirectory::new();
        let mut lookup = DebouncedLookup::new(dir);

        lookup.set_input("lea", 0);
        lookup.set_input("", 100);
        lookup.poll(10_000);

        assert_eq!(calls.get(), 0);
        assert!(lookup.results().is_empty());
        assert!(!lookup.is_loading());
        assert!(lookup.error().is_none());
    }

    #[test]
    fn query_fires_after_quiet_interval() {
        let (dir, calls, last) = CountingDirectory::new();
        let mut lookup = DebouncedLookup::new(dir);

        lookup.set_input("lea", 0);
        lookup.poll(299);
        assert_eq!(calls.get(), 0);
        assert!(lookup.has_pending());

        lookup.poll(300);
        assert_eq!(calls.get(), 1);
        assert_eq!(*last.borrow(), "lea");
        assert_eq!(lookup.results().len(), 1);
        assert!(!lookup.has_pending());
    }

    #[test]
    fn rapid_edits_fire_exactly_once_with_final_value() {
        let (dir, calls, last) = CountingDirectory::new();
        let mut lookup = DebouncedLookup::new(dir);

        lookup.set_input("l", 0);
        lookup.set_input("le", 80);
        lookup.set_input("lea", 160);
        lookup.set_input("lean", 240);

        // Earlier deadlines were replaced, nothing fires yet
        lookup.poll(300);
        assert_eq!(calls.get(), 0);

        lookup.poll(240 + DEFAULT_QUIET_INTERVAL);
        assert_eq!(calls.get(), 1);
        assert_eq!(*last.borrow(), "lean");
    }

    #[test]
    fn fired_query_does_not_refire() {
        let (dir, calls, _) = CountingDirectory::new();
        let mut lookup = DebouncedLookup::new(dir);

        lookup.set_input("lea", 0);
        lookup.poll(300);
        lookup.poll(600);
        lookup.poll(900);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn directory_failure_sets_error_and_clears_results() {
        let (mut dir, _, _) = CountingDirectory::new();
        dir.fail = true;
        let mut lookup = DebouncedLookup::new(dir);

        lookup.set_input("lea", 0);
        lookup.poll(300);

        assert!(lookup.results().is_empty());
        assert_eq!(lookup.error(), Some("directory offline"));
        assert!(!lookup.is_loading());
    }

    #[test]
    fn new_search_clears_previous_error() {
        let dir = StaticDirectory::sample();
        let mut lookup = DebouncedLookup::new(dir);

        lookup.set_input("leanne", 0);
        lookup.poll(300);
        assert_eq!(lookup.results().len(), 1);
        assert!(lookup.error().is_none());
    }

    #[test]
    fn custom_quiet_interval() {
        let (dir, calls, _) = CountingDirectory::new();
        let mut lookup = DebouncedLookup::with_quiet_interval(dir, 50);

        lookup.set_input("lea", 0);
        lookup.poll(49);
        assert_eq!(calls.get(), 0);
        lookup.poll(50);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clearing_input_drops_pending_query() {
        let (dir, calls, _) = CountingDirectory::new();
        let mut lookup = DebouncedLookup::new(dir);

        lookup.set_input("lea", 0);
        lookup.poll(300);
        assert_eq!(lookup.results().len(), 1);

        lookup.set_input("lean", 400);
        lookup.set_input("", 500);
        lookup.poll(1_000);

        // The pending "lean" query was invalidated by the clear
        assert_eq!(calls.get(), 1);
        assert!(lookup.results().is_empty());
    }
}
