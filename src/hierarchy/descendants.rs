//! Depth-bounded, pattern-filtered descendant traversal.

use crate::hierarchy::context::TraversalContext;
use crate::hierarchy::patterns::StructurePatterns;
use crate::tree::{ContentTree, Page};
use std::collections::HashSet;
use tracing::{trace, warn};

/// Walks the descendants of a page into a flat list.
pub struct DescendantWalker<'a> {
    tree: &'a dyn ContentTree,
}

impl<'a> DescendantWalker<'a> {
    pub fn new(tree: &'a dyn ContentTree) -> Self {
        Self { tree }
    }

    /// Collect descendants of `page`.
    ///
    /// `depth == 0` exports nothing, `depth > 0` exports that many generations and
    /// `depth < 0` is unbounded. Nothing is returned when the context is a descendant
    /// context. A page is emitted before its own descendants. Patterns decide whether a
    /// page is emitted; pages that are not emitted are still descended into.
    pub fn descendants(
        &self,
        page: Option<&Page>,
        context: &TraversalContext,
        patterns: &StructurePatterns,
        depth: i32,
    ) -> Vec<Page> {
        let Some(page) = page else {
            return Vec::new();
        };
        if depth == 0 || context.is_descendant() {
            return Vec::new();
        }

        let mut pages = Vec::new();
        let mut branch = HashSet::new();
        branch.insert(page.path.clone());
        self.collect(page, patterns, depth, &mut branch, &mut pages);
        pages
    }

    fn collect(
        &self,
        page: &Page,
        patterns: &StructurePatterns,
        depth: i32,
        branch: &mut HashSet<String>,
        pages: &mut Vec<Page>,
    ) {
        if depth == 0 {
            return;
        }
        let children = match self.tree.children(page) {
            Some(children) if !children.is_empty() => children,
            _ => return,
        };

        // one level further down the tree; negative depth stays unbounded
        let depth = if depth > 0 { depth - 1 } else { depth };

        for child in children {
            if branch.contains(&child.path) {
                warn!(page = %child.path, parent = %page.path, "Skipping page already on the current branch");
                continue;
            }

            if patterns.matches(&child.path) {
                trace!(page = %child.path, "Including descendant");
                pages.push(child.clone());
            } else {
                trace!(page = %child.path, "Descendant excluded by structure patterns");
            }

            branch.insert(child.path.clone());
            self.collect(&child, patterns, depth, branch, pages);
            branch.remove(&child.path);
        }
    }
}
