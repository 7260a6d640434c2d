//! Layered properties resolution for Geode processes.
//!
//! This crate finds the properties file a process should load (searching the
//! working directory, the home directory, and a resource path under both the
//! current and legacy file names) and resolves single property values, checking
//! override sources before the file.

pub mod constants;
mod loader;
pub mod locator;
pub mod namespace;
pub mod overrides;
pub mod properties;
mod resolver;

pub use loader::{ConfigError, PropertiesLoader};
pub use locator::{CandidateNames, FileLocation, FileLocator, NoResources, ResourceLoader, SearchPath};
pub use namespace::{Namespace, Namespaces};
pub use overrides::{MapOverrides, OverrideSource, ProcessEnv};
pub use properties::{ParseError, PropertyStore};
pub use resolver::{PropertiesResolver, PropertySource, ResolvedProperty};
