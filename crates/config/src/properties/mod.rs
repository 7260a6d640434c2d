//! Immutable key/value store parsed from properties text.
//!
//! Responsibilities:
//! - Hold the entries of one loaded properties file (`PropertyStore`).
//! - Parse and write the properties text format (`parser.rs`, `writer.rs`).
//!
//! Does NOT handle:
//! - Locating or reading files (see `locator` and `loader/file.rs`).
//! - Override sources or namespace prefixes (see `resolver.rs`).
//!
//! Invariants:
//! - A store never changes after construction.
//! - Keys are raw, unprefixed property names.

mod parser;
mod writer;

use std::collections::BTreeMap;

pub use parser::ParseError;

/// Read-only map of property names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    entries: BTreeMap<String, String>,
}

impl PropertyStore {
    /// A store with no entries, used when no properties file was found.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse properties text.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for a malformed `\uXXXX` escape.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Ok(Self {
            entries: parser::parse(text)?,
        })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the store as properties text, one `key=value` line per entry in key order.
    pub fn to_properties_string(&self) -> String {
        writer::write(self.iter())
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
