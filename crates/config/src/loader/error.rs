//! Error types for properties loading.
//!
//! Responsibilities:
//! - Define load failures for a resolved properties file (read, parse, bad location).
//!
//! Does NOT handle:
//! - The "no file found" case, which is `None` from the locator and never an error.
//!
//! Invariants:
//! - Load failures always carry the location and wrap the underlying cause.

use thiserror::Error;

use crate::locator::FileLocation;
use crate::properties::ParseError;

/// Errors that can occur while loading properties.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read properties file at {location}: {source}")]
    PropertiesRead {
        location: FileLocation,
        source: std::io::Error,
    },

    #[error("Failed to parse properties file at {location}: {source}")]
    PropertiesParse {
        location: FileLocation,
        source: ParseError,
    },

    #[error("Properties location {location} is not a local file")]
    InvalidLocation { location: FileLocation },
}

impl ConfigError {
    /// The properties file location involved.
    pub fn location(&self) -> &FileLocation {
        match self {
            ConfigError::PropertiesRead { location, .. }
            | ConfigError::PropertiesParse { location, .. }
            | ConfigError::InvalidLocation { location } => location,
        }
    }
}
