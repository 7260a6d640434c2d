//! Properties loader: from the environment and filesystem to a resolver.
//!
//! Responsibilities:
//! - Provide the builder-pattern `PropertiesLoader` that runs the search and load.
//! - Read a resolved properties file into a store (`file.rs`).
//! - Define the loading error type (`ConfigError`).
//!
//! Does NOT handle:
//! - The search order itself (see `locator`).
//! - Single-key lookups (see `resolver.rs`).
//!
//! Invariants / Assumptions:
//! - Finding no file is not an error; failing to load a found file is.
//! - The process environment is read, never written.

mod builder;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::PropertiesLoader;
pub use error::ConfigError;
pub(crate) use file::read_properties_file;
