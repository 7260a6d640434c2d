//! Single-key property resolution across override sources and the properties file.
//!
//! Responsibilities:
//! - Own the loaded `PropertyStore` and answer lookups against it.
//! - Check each namespace's prefixed key in the override source before the file.
//! - Report which source supplied a value (`resolve_with_source`).
//! - Resolve the properties file name that should be searched for.
//!
//! Does NOT handle:
//! - Finding the properties file (see `locator`).
//! - Merging values from several sources; the first hit wins.
//!
//! Invariants:
//! - Lookup order: every namespace prefix in priority order, then the raw key in the file.
//! - The store is never mutated after construction.
//! - A present override value wins even when empty or blank.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::loader::{ConfigError, read_properties_file};
use crate::locator::FileLocation;
use crate::namespace::Namespaces;
use crate::overrides::OverrideSource;
use crate::properties::PropertyStore;

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertySource {
    /// The override source, under the full prefixed key.
    Override { key: String },
    /// The loaded properties file.
    File,
}

/// A value together with the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedProperty {
    pub value: String,
    pub source: PropertySource,
}

/// Answers property lookups for one loaded properties file.
#[derive(Clone)]
pub struct PropertiesResolver {
    store: PropertyStore,
    location: Option<FileLocation>,
    overrides: Arc<dyn OverrideSource>,
    namespaces: Namespaces,
}

impl fmt::Debug for PropertiesResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertiesResolver")
            .field("location", &self.location)
            .field("entries", &self.store.len())
            .field("namespaces", &self.namespaces)
            .finish_non_exhaustive()
    }
}

impl PropertiesResolver {
    /// Load the file at `location`, or start from an empty store when `None`.
    ///
    /// # Errors
    ///
    /// Returns a load failure if the location cannot be read or parsed. A missing
    /// location is not an error.
    pub fn new(
        location: Option<&FileLocation>,
        overrides: Arc<dyn OverrideSource>,
    ) -> Result<Self, ConfigError> {
        let store = match location {
            Some(location) => read_properties_file(location)?,
            None => PropertyStore::empty(),
        };

        Ok(Self {
            store,
            location: location.cloned(),
            overrides,
            namespaces: Namespaces::default(),
        })
    }

    /// Wrap an already-parsed store.
    pub fn from_store(store: PropertyStore, overrides: Arc<dyn OverrideSource>) -> Self {
        Self {
            store,
            location: None,
            overrides,
            namespaces: Namespaces::default(),
        }
    }

    /// Replace the namespace list used for override lookups.
    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    /// The location the store was loaded from, if any.
    pub fn properties_file(&self) -> Option<&FileLocation> {
        self.location.as_ref()
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    /// Value for `key`: prefixed override keys first, then the file.
    pub fn get_property(&self, key: &str) -> Option<String> {
        self.resolve_with_source(key).map(|resolved| resolved.value)
    }

    /// Like `get_property`, also reporting which source won.
    pub fn resolve_with_source(&self, key: &str) -> Option<ResolvedProperty> {
        for namespace in &self.namespaces {
            let prefixed = namespace.prefixed(key);
            if let Some(value) = self.overrides.get(&prefixed) {
                tracing::trace!(key, source = %prefixed, "Resolved property from override");
                return Some(ResolvedProperty {
                    value,
                    source: PropertySource::Override { key: prefixed },
                });
            }
        }

        self.store.get(key).map(|value| {
            tracing::trace!(key, "Resolved property from properties file");
            ResolvedProperty {
                value: value.to_string(),
                source: PropertySource::File,
            }
        })
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }

    /// True if the resolved value exists and is not empty after trimming.
    pub fn has_non_blank_value(&self, key: &str) -> bool {
        self.get_property(key)
            .is_some_and(|value| !value.trim().is_empty())
    }

    /// The properties file name to search for: each namespace's file-name
    /// override in priority order, else the current namespace's default.
    ///
    /// Blank override values are ignored, matching `CandidateNames`.
    pub fn specified_properties_file_name(&self) -> String {
        self.namespaces
            .iter()
            .filter_map(|namespace| self.overrides.get(&namespace.file_key))
            .find(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.namespaces.current().default_file.clone())
    }
}
