//! Centralized constants for the properties resolver.
//!
//! The two namespaces below are the "current" and "legacy" naming schemes.
//! Both are consulted for every lookup, current first.

// =============================================================================
// Current namespace
// =============================================================================

/// Prefix applied to a bare key when looking it up in the override source.
pub const GEODE_PREFIX: &str = "geode.";

/// Override key naming an explicit properties file.
pub const GEODE_PROPERTIES_FILE_KEY: &str = "geodePropertyFile";

/// Properties file searched for when no explicit name is given.
pub const DEFAULT_GEODE_PROPERTIES_FILE: &str = "geode.properties";

// =============================================================================
// Legacy namespace
// =============================================================================

/// Legacy prefix, kept so existing deployments keep resolving.
pub const GEMFIRE_PREFIX: &str = "gemfire.";

/// Legacy override key naming an explicit properties file.
pub const GEMFIRE_PROPERTIES_FILE_KEY: &str = "gemfirePropertyFile";

/// Legacy default properties file name.
pub const DEFAULT_GEMFIRE_PROPERTIES_FILE: &str = "gemfire.properties";

// =============================================================================
// Defaults
// =============================================================================

/// File name reported when no override names one.
pub const DEFAULT_PROPERTIES_FILE: &str = DEFAULT_GEODE_PROPERTIES_FILE;
