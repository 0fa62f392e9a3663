//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ApiError, HierarchyError};

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Hierarchy(HierarchyError::PageNotFound(path)) => {
            format!("Page not found in tree: {}", path)
        }
        other => other.to_string(),
    }
}
