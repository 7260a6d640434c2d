//! Properties file search.
//!
//! Responsibilities:
//! - Build the ordered candidate file names (`CandidateNames`).
//! - Search each name in the working directory, the home directory, then resources.
//! - Canonicalize filesystem hits, falling back to the absolute path.
//!
//! Does NOT handle:
//! - Reading or parsing the file (see `loader/file.rs`).
//! - Property lookups (see `resolver.rs`).
//!
//! Invariants:
//! - Explicit names come before default names; within each group, namespace order.
//! - The first hit ends the whole search. Files are never merged.
//! - Directories are never a hit.
//! - Finding nothing is `None`, not an error.

mod location;
mod resources;

use std::path::{Path, PathBuf};

pub use location::FileLocation;
pub use resources::{NoResources, ResourceLoader, SearchPath};

use crate::namespace::Namespaces;
use crate::overrides::OverrideSource;

/// Candidate properties file names in search order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateNames {
    names: Vec<String>,
}

impl CandidateNames {
    /// Candidates for the two-namespace scheme.
    ///
    /// Absent, empty, or whitespace-only explicit names are dropped.
    pub fn new(
        explicit_current: Option<&str>,
        explicit_legacy: Option<&str>,
        default_current: &str,
        default_legacy: &str,
    ) -> Self {
        Self::from_parts(
            [explicit_current, explicit_legacy],
            [default_current, default_legacy],
        )
    }

    /// Candidates for any number of namespaces.
    pub fn from_parts<'a, E, D>(explicit: E, defaults: D) -> Self
    where
        E: IntoIterator<Item = Option<&'a str>>,
        D: IntoIterator<Item = &'a str>,
    {
        let mut names = Vec::new();
        for name in explicit.into_iter().flatten() {
            if name.trim().is_empty() {
                tracing::debug!("Ignoring blank explicit properties file name");
                continue;
            }
            names.push(name.to_string());
        }
        names.extend(defaults.into_iter().map(str::to_string));
        Self { names }
    }

    /// Read each namespace's file-name override key, then append the defaults.
    pub fn from_overrides(overrides: &dyn OverrideSource, namespaces: &Namespaces) -> Self {
        let explicit: Vec<Option<String>> = namespaces
            .iter()
            .map(|ns| overrides.get(&ns.file_key))
            .collect();
        Self::from_parts(
            explicit.iter().map(Option::as_deref),
            namespaces.iter().map(|ns| ns.default_file.as_str()),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Searches the filesystem and resources for a properties file.
pub struct FileLocator {
    working_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
    resources: Box<dyn ResourceLoader>,
}

impl Default for FileLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FileLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileLocator")
            .field("working_dir", &self.working_dir)
            .field("home_dir", &self.home_dir)
            .finish_non_exhaustive()
    }
}

impl FileLocator {
    /// Locator for the current process: its working directory, the user's home
    /// directory, and no resources.
    pub fn new() -> Self {
        let working_dir = match std::env::current_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!(error = %e, "Could not determine working directory");
                None
            }
        };
        let home_dir = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

        Self {
            working_dir,
            home_dir,
            resources: Box::new(NoResources),
        }
    }

    /// Directory that relative names are resolved against.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    /// Skip the home directory location entirely.
    pub fn without_home_dir(mut self) -> Self {
        self.home_dir = None;
        self
    }

    pub fn with_resources(mut self, resources: impl ResourceLoader + 'static) -> Self {
        self.resources = Box::new(resources);
        self
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// Return the first candidate found, or `None` if no candidate exists anywhere.
    pub fn locate(&self, candidates: &CandidateNames) -> Option<FileLocation> {
        for name in candidates.iter() {
            if let Some(location) = self.find(name) {
                tracing::debug!(name, location = %location, "Located properties file");
                return Some(location);
            }
        }
        tracing::debug!(
            candidates = candidates.len(),
            "No properties file found; using built-in defaults"
        );
        None
    }

    fn find(&self, name: &str) -> Option<FileLocation> {
        let local = match &self.working_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        };
        if let Some(location) = existing_file(&local) {
            return Some(location);
        }

        if let Some(home) = &self.home_dir
            && let Some(location) = existing_file(&home.join(name))
        {
            return Some(location);
        }

        self.resources.resolve_resource(name)
    }
}

fn existing_file(path: &Path) -> Option<FileLocation> {
    if path.is_file() {
        return canonical_location(path);
    }
    if path.exists() {
        tracing::debug!(
            path = %path.display(),
            "Candidate exists but is not a regular file; skipping"
        );
    }
    None
}

/// Canonical `file://` location for `path`, or its absolute form if
/// canonicalization fails.
pub(crate) fn canonical_location(path: &Path) -> Option<FileLocation> {
    let resolved = match path.canonicalize() {
        Ok(canonical) => canonical,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Could not canonicalize properties path; using absolute path"
            );
            std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
        }
    };

    let location = FileLocation::from_path(&resolved);
    if location.is_none() {
        tracing::warn!(
            path = %resolved.display(),
            "Properties path cannot be expressed as a URL; skipping"
        );
    }
    location
}
