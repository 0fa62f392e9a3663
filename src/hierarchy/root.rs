//! Root page resolution by ancestor walk.

use crate::error::HierarchyError;
use crate::tree::{ContentTree, Page};
use crate::types::PN_IS_ROOT;
use std::collections::HashSet;
use tracing::{debug, error, instrument};

/// Default bound on ancestor hops
pub const DEFAULT_MAX_ANCESTOR_HOPS: usize = 1024;

/// Finds the hierarchy root above (or at) a page.
///
/// A page is the root when its template declares structure support, it has content,
/// and its content policy carries `isRoot = true`. The walk starts at the page itself
/// and stops at the first match.
pub struct RootResolver<'a> {
    tree: &'a dyn ContentTree,
    max_hops: usize,
}

impl<'a> RootResolver<'a> {
    pub fn new(tree: &'a dyn ContentTree) -> Self {
        Self {
            tree,
            max_hops: DEFAULT_MAX_ANCESTOR_HOPS,
        }
    }

    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    /// Resolve the root page.
    ///
    /// `Ok(None)` when no ancestor qualifies. Errors when the tree has no policy
    /// provider or the ancestor chain loops or exceeds the hop bound.
    #[instrument(skip(self, page), fields(page = %page.path))]
    pub fn resolve(&self, page: &Page) -> Result<Option<Page>, HierarchyError> {
        let Some(policies) = self.tree.policy_provider() else {
            error!("Cannot resolve root page: content policy provider unavailable");
            return Err(HierarchyError::PolicyProviderUnavailable(page.path.clone()));
        };

        let mut visited = HashSet::new();
        let mut candidate = Some(page.clone());
        while let Some(current) = candidate {
            if !visited.insert(current.path.clone()) {
                return Err(HierarchyError::CyclicAncestry(current.path));
            }
            if visited.len() > self.max_hops {
                return Err(HierarchyError::AncestorLimitExceeded {
                    start: page.path.clone(),
                    max_hops: self.max_hops,
                });
            }

            if current.has_structure_support()
                && self.tree.has_content(&current)
                && policies.policy_flag(&current, PN_IS_ROOT)
            {
                debug!(root = %current.path, "Found root page");
                return Ok(Some(current));
            }

            candidate = self.tree.parent(&current);
        }

        debug!("No root page flagged in ancestor chain");
        Ok(None)
    }
}
