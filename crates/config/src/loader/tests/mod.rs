//! Tests for the properties loader.
//!
//! Responsibilities:
//! - Test the candidate and location search order end to end through `PropertiesLoader`.
//! - Test property precedence for resolvers built by the loader.
//! - Test that loading leaves the process environment untouched.
//!
//! Invariants:
//! - Working and home directories are injected temp dirs; tests never change the cwd.
//! - Tests that touch the process environment use `serial_test` and `env_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use crate::locator::{FileLocation, FileLocator, SearchPath};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Separate working, home, and resource directories for one test.
pub struct SearchFixture {
    pub work: TempDir,
    pub home: TempDir,
    pub resources: TempDir,
}

impl SearchFixture {
    pub fn new() -> Self {
        Self {
            work: TempDir::new().unwrap(),
            home: TempDir::new().unwrap(),
            resources: TempDir::new().unwrap(),
        }
    }

    pub fn locator(&self) -> FileLocator {
        FileLocator::new()
            .with_working_dir(self.work.path())
            .with_home_dir(self.home.path())
            .with_resources(SearchPath::new().with_root(self.resources.path()))
    }

    pub fn in_work(&self, name: &str) -> PathBuf {
        create_file(self.work.path(), name)
    }

    pub fn in_home(&self, name: &str) -> PathBuf {
        create_file(self.home.path(), name)
    }

    pub fn in_resources(&self, name: &str) -> PathBuf {
        create_file(self.resources.path(), name)
    }
}

pub fn create_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("name={name}\n")).unwrap();
    path
}

/// The location the locator is expected to return for an existing file.
pub fn location_of(path: &Path) -> FileLocation {
    FileLocation::from_path(&path.canonicalize().unwrap()).unwrap()
}
