//! Properties loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `PropertiesLoader` that wires the whole flow:
//!   candidate names, file search, resolver construction.
//! - Let callers inject the override source, namespaces, and locator.
//!
//! Does NOT handle:
//! - The search algorithm itself (see `locator`).
//! - Property lookups (see `resolver.rs`).
//!
//! Invariants / Assumptions:
//! - An explicit location set with `with_location` bypasses the search.
//! - The loader only reads the override source; it never sets values in it.

use std::sync::Arc;

use super::error::ConfigError;
use crate::locator::{CandidateNames, FileLocation, FileLocator};
use crate::namespace::Namespaces;
use crate::overrides::{OverrideSource, ProcessEnv};
use crate::resolver::PropertiesResolver;

/// Builds a `PropertiesResolver` from the environment and the filesystem.
pub struct PropertiesLoader {
    overrides: Arc<dyn OverrideSource>,
    namespaces: Namespaces,
    locator: FileLocator,
    location: Option<FileLocation>,
}

impl Default for PropertiesLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertiesLoader {
    /// Loader reading overrides from the process environment and searching the
    /// current working directory and home directory.
    pub fn new() -> Self {
        Self {
            overrides: Arc::new(ProcessEnv),
            namespaces: Namespaces::default(),
            locator: FileLocator::new(),
            location: None,
        }
    }

    /// Use `overrides` instead of the process environment.
    pub fn with_overrides(mut self, overrides: impl OverrideSource + 'static) -> Self {
        self.overrides = Arc::new(overrides);
        self
    }

    /// Use an override source shared with other components.
    pub fn with_shared_overrides(mut self, overrides: Arc<dyn OverrideSource>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_namespaces(mut self, namespaces: Namespaces) -> Self {
        self.namespaces = namespaces;
        self
    }

    pub fn with_locator(mut self, locator: FileLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Load this location instead of searching.
    pub fn with_location(mut self, location: FileLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Candidate file names, built from the override source and namespaces.
    pub fn candidate_names(&self) -> CandidateNames {
        CandidateNames::from_overrides(self.overrides.as_ref(), &self.namespaces)
    }

    /// The location that `load` would read: the explicit location if set,
    /// otherwise the search result.
    pub fn locate(&self) -> Option<FileLocation> {
        if let Some(location) = &self.location {
            return Some(location.clone());
        }
        self.locator.locate(&self.candidate_names())
    }

    /// Locate and load the properties file, then build the resolver.
    ///
    /// # Errors
    ///
    /// Returns a load failure if a file was found but could not be read or parsed.
    /// Finding no file is not an error; the resolver then has an empty store.
    pub fn load(self) -> Result<PropertiesResolver, ConfigError> {
        let location = self.locate();
        if location.is_none() {
            tracing::info!("No properties file found; only overrides and defaults apply");
        }

        Ok(
            PropertiesResolver::new(location.as_ref(), self.overrides)?
                .with_namespaces(self.namespaces),
        )
    }
}
