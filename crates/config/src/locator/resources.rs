//! Resource lookup, the third place searched for each candidate name.
//!
//! Responsibilities:
//! - Define the `ResourceLoader` capability.
//! - Provide `NoResources` and a directory-based `SearchPath`.
//!
//! Does NOT handle:
//! - Working-directory or home-directory lookups (see `locator/mod.rs`).
//!
//! Invariants:
//! - A miss is `None`, never an error.
//! - `SearchPath` roots are tried in insertion order; only regular files match.
//! - A `SearchPath` hit always lies under one of its roots.

use std::path::{Component, Path, PathBuf};

use super::location::FileLocation;

/// Resolves a resource name to a location.
pub trait ResourceLoader: Send + Sync {
    fn resolve_resource(&self, name: &str) -> Option<FileLocation>;
}

impl<F> ResourceLoader for F
where
    F: Fn(&str) -> Option<FileLocation> + Send + Sync,
{
    fn resolve_resource(&self, name: &str) -> Option<FileLocation> {
        self(name)
    }
}

/// A loader with no resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceLoader for NoResources {
    fn resolve_resource(&self, _name: &str) -> Option<FileLocation> {
        None
    }
}

/// Ordered list of directories searched for resources.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a root directory. Earlier roots win.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPath {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ResourceLoader for SearchPath {
    fn resolve_resource(&self, name: &str) -> Option<FileLocation> {
        let relative = Path::new(name.trim_start_matches('/'));
        if relative.as_os_str().is_empty()
            || relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            tracing::debug!(name, "Resource name leaves the search path; skipping");
            return None;
        }

        self.roots.iter().find_map(|root| {
            let candidate = root.join(relative);
            if candidate.is_file() {
                super::canonical_location(&candidate)
            } else {
                None
            }
        })
    }
}
