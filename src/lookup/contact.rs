//! Contact records and directories

use std::fmt;

/// One searchable record: a display name and a contact identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

/// Error type for directory searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    message: String,
}

impl LookupError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LookupError {}

/// Searchable contact source
///
/// The production counterpart is a remote name-search endpoint; that network
/// layer stays outside this crate. Anything that can answer a query string
/// with matching contacts fits here, including the counting fakes the tests
/// use.
pub trait ContactDirectory {
    /// Find contacts matching `query`
    ///
    /// # Errors
    /// Returns `LookupError` when the backing source fails.
    fn search(&self, query: &str) -> Result<Vec<Contact>, LookupError>;
}

/// In-memory directory with case-insensitive substring matching on names
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    contacts: Vec<Contact>,
}

impl StaticDirectory {
    #[must_use]
    pub const fn new(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Small sample directory for the demo command
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            Contact::new("Leanne Graham", "sincere@april.biz"),
            Contact::new("Ervin Howell", "shanna@melissa.tv"),
            Contact::new("Clementine Bauch", "nathan@yesenia.net"),
            Contact::new("Patricia Lebsack", "julianne.oconner@kory.org"),
            Contact::new("Chelsey Dietrich", "lucio_hettinger@annie.ca"),
        ])
    }
}

impl ContactDirectory for StaticDirectory {
    fn search(&self, query: &str) -> Result<Vec<Contact>, LookupError> {
        let needle = query.to_lowercase();
        Ok(self
            .contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
