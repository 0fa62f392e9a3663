//! Error types for page hierarchy resolution and export.

use thiserror::Error;

/// Hierarchy-related errors
///
/// "No root" and "no descendants" are ordinary results (`None` / empty), not errors.
#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error("Invalid structure pattern '{fragment}': {source}")]
    PatternCompile {
        fragment: String,
        #[source]
        source: regex::Error,
    },

    #[error("Content policy provider unavailable while resolving root for {0}")]
    PolicyProviderUnavailable(String),

    #[error("Cyclic ancestor chain detected at {0}")]
    CyclicAncestry(String),

    #[error("Ancestor chain from {start} exceeded {max_hops} hops")]
    AncestorLimitExceeded { start: String, max_hops: usize },

    #[error("Page not found: {0}")]
    PageNotFound(String),
}

/// API-level errors (configuration, fixtures, CLI)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load tree fixture {path}: {message}")]
    TreeLoad { path: String, message: String },

    #[error("Output error: {0}")]
    Output(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
