//! Resolved properties file location.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

/// Where the properties file was found.
///
/// Filesystem hits are `file://` URLs of the canonical (or best-effort absolute)
/// path. Resource providers may hand back other schemes; those can be reported
/// but not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileLocation(Url);

impl FileLocation {
    /// Wrap an arbitrary URL.
    pub fn from_url(url: Url) -> Self {
        Self(url)
    }

    /// Build a location from an absolute path.
    ///
    /// Returns `None` if the path is relative or cannot be expressed as a URL.
    pub fn from_path(path: &Path) -> Option<Self> {
        Url::from_file_path(path).ok().map(Self)
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// The local path, for `file://` locations.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        if self.0.scheme() != "file" {
            return None;
        }
        self.0.to_file_path().ok()
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
