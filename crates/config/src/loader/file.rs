//! Properties file reading.
//!
//! Responsibilities:
//! - Turn a resolved `FileLocation` into a `PropertyStore`.
//!
//! Does NOT handle:
//! - Choosing the location (see `locator`).
//!
//! Invariants:
//! - Every failure is propagated as a `ConfigError` load failure; there is no
//!   silent fallback to an empty store.
//! - Only `file://` locations can be read.

use super::error::ConfigError;
use crate::locator::FileLocation;
use crate::properties::PropertyStore;

/// Read and parse the properties file at `location`.
pub(crate) fn read_properties_file(location: &FileLocation) -> Result<PropertyStore, ConfigError> {
    let path = location
        .to_file_path()
        .ok_or_else(|| ConfigError::InvalidLocation {
            location: location.clone(),
        })?;

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::PropertiesRead {
        location: location.clone(),
        source: e,
    })?;

    let store = PropertyStore::parse(&content).map_err(|e| ConfigError::PropertiesParse {
        location: location.clone(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        entries = store.len(),
        "Loaded properties file"
    );
    Ok(store)
}
