//! Key namespaces for the override source.
//!
//! Responsibilities:
//! - Describe one naming scheme (`Namespace`): key prefix, file-name override key,
//!   and default properties file name.
//! - Keep the schemes in priority order (`Namespaces`).
//!
//! Does NOT handle:
//! - Reading the override source (see `overrides.rs`).
//! - Searching for files (see `locator`).
//!
//! Invariants:
//! - Iteration order is priority order; the first namespace is the current one.
//! - A `Namespaces` list is never empty.

use crate::constants::{
    DEFAULT_GEMFIRE_PROPERTIES_FILE, DEFAULT_GEODE_PROPERTIES_FILE, GEMFIRE_PREFIX,
    GEMFIRE_PROPERTIES_FILE_KEY, GEODE_PREFIX, GEODE_PROPERTIES_FILE_KEY,
};

/// A single naming scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix prepended to a bare key, e.g. `geode.`.
    pub prefix: String,
    /// Override key whose value names an explicit properties file.
    pub file_key: String,
    /// Properties file name searched for when no explicit name is set.
    pub default_file: String,
}

impl Namespace {
    pub fn new(
        prefix: impl Into<String>,
        file_key: impl Into<String>,
        default_file: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            file_key: file_key.into(),
            default_file: default_file.into(),
        }
    }

    /// The current (post-rename) scheme.
    pub fn geode() -> Self {
        Self::new(
            GEODE_PREFIX,
            GEODE_PROPERTIES_FILE_KEY,
            DEFAULT_GEODE_PROPERTIES_FILE,
        )
    }

    /// The legacy (pre-rename) scheme.
    pub fn gemfire() -> Self {
        Self::new(
            GEMFIRE_PREFIX,
            GEMFIRE_PROPERTIES_FILE_KEY,
            DEFAULT_GEMFIRE_PROPERTIES_FILE,
        )
    }

    /// Apply this namespace's prefix to a bare key.
    pub fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

/// Ordered list of namespaces, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces(Vec<Namespace>);

impl Default for Namespaces {
    fn default() -> Self {
        Self(vec![Namespace::geode(), Namespace::gemfire()])
    }
}

impl Namespaces {
    /// Build a list from namespaces in priority order.
    ///
    /// Returns `None` for an empty list.
    pub fn new(namespaces: Vec<Namespace>) -> Option<Self> {
        if namespaces.is_empty() {
            None
        } else {
            Some(Self(namespaces))
        }
    }

    /// The highest-priority namespace.
    pub fn current(&self) -> &Namespace {
        &self.0[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Namespace> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Namespaces {
    type Item = &'a Namespace;
    type IntoIter = std::slice::Iter<'a, Namespace>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
