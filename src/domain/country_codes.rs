//! Country code to local-number length table.

use std::collections::BTreeMap;

/// Entries every table starts from.
pub const DEFAULT_COUNTRY_CODES: [(&str, usize); 5] =
    [("1", 10), ("44", 10), ("91", 10), ("81", 10), ("61", 9)];

/// Immutable mapping from dialing prefix to the required number of local digits.
///
/// The table is built once (usually from [`crate::Config`]) and handed to
/// [`super::PhoneNumberValidator`]. Tests can substitute their own table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCodeTable {
    lengths: BTreeMap<String, usize>,
}

impl CountryCodeTable {
    /// Create an empty table that supports no country codes.
    pub fn empty() -> Self {
        Self {
            lengths: BTreeMap::new(),
        }
    }

    /// Add or replace a single entry.
    pub fn with_entry(mut self, code: impl Into<String>, required_length: usize) -> Self {
        self.lengths.insert(code.into(), required_length);
        self
    }

    /// Whether the code is a key in the table.
    pub fn contains(&self, code: &str) -> bool {
        self.lengths.contains_key(code)
    }

    /// Required local-number length for a code, if supported.
    pub fn required_length(&self, code: &str) -> Option<usize> {
        self.lengths.get(code).copied()
    }

    /// Iterate over `(code, length)` pairs in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.lengths.iter().map(|(code, len)| (code.as_str(), *len))
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

impl Default for CountryCodeTable {
    fn default() -> Self {
        DEFAULT_COUNTRY_CODES
            .iter()
            .fold(Self::empty(), |table, (code, len)| table.with_entry(*code, *len))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for CountryCodeTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self {
            lengths: iter.into_iter().map(|(code, len)| (code.into(), len)).collect(),
        }
    }
}
