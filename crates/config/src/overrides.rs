//! Override sources consulted before the properties file.
//!
//! Responsibilities:
//! - Define the `OverrideSource` capability (`get(key) -> Option<String>`).
//! - Read the process environment (`ProcessEnv`).
//! - Provide an in-memory source for embedding hosts and tests (`MapOverrides`).
//!
//! Does NOT handle:
//! - Prefixing keys with a namespace (see `namespace.rs`).
//! - Loading `.env` files into the environment (see `loader/builder.rs`).
//!
//! Invariants:
//! - Sources are read-only from the resolver's point of view.
//! - Values are returned verbatim. Empty and whitespace-only values are present values.

use std::collections::BTreeMap;

/// A string-keyed lookup checked before the properties file.
pub trait OverrideSource: Send + Sync {
    /// Return the value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> OverrideSource for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Override source backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl OverrideSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Keys the platform cannot represent are never set.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }

        match std::env::var_os(key)?.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!(key, "Ignoring non UTF-8 environment value");
                None
            }
        }
    }
}

/// In-memory override source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapOverrides {
    values: BTreeMap<String, String>,
}

impl MapOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }
}

impl OverrideSource for MapOverrides {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for MapOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for MapOverrides
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
