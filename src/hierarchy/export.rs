//! Export assembly: descendant traversal, entry-point reconciliation, model resolution
//! and export keys.

use crate::error::HierarchyError;
use crate::hierarchy::context::TraversalContext;
use crate::hierarchy::descendants::DescendantWalker;
use crate::hierarchy::patterns::resolve_structure_patterns;
use crate::model::ModelResolver;
use crate::style::{structure_depth, Style};
use crate::tree::{ContentTree, Page};
use crate::url::UrlMapper;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Per-request export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Raw structure patterns supplied with the request; wins over the style setting
    pub structure_patterns: Option<String>,
    /// Author (editing) mode exports raw paths as keys
    pub author_mode: bool,
    /// Append `.html` to mapped URLs
    pub use_extension: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            structure_patterns: None,
            author_mode: false,
            use_extension: true,
        }
    }
}

/// Export key → model map, iterated in insertion order.
///
/// Inserting an existing key replaces its model in place (last write wins).
#[derive(Debug, Clone)]
pub struct ExportRecord<M> {
    entries: Vec<(String, M)>,
    index: HashMap<String, usize>,
}

impl<M> Default for ExportRecord<M> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<M> ExportRecord<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a model, returning the replaced one for a duplicate key
    pub fn insert(&mut self, key: String, model: M) -> Option<M> {
        match self.index.get(&key) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx].1, model)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, model));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&M> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &M)> {
        self.entries.iter().map(|(key, model)| (key.as_str(), model))
    }
}

impl<M> IntoIterator for ExportRecord<M> {
    type Item = (String, M);
    type IntoIter = std::vec::IntoIter<(String, M)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<M: Serialize> Serialize for ExportRecord<M> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, model) in &self.entries {
            map.serialize_entry(key, model)?;
        }
        map.end()
    }
}

/// Append the context's entry point to the descendant list when it is missing.
///
/// Only applies to top-level contexts: descendant contexts, a missing entry point, an
/// entry point equal to `current`, or one already in `pages` leave the list unchanged.
pub fn reconcile_entry_point(context: &TraversalContext, current: &Page, pages: &mut Vec<Page>) {
    if context.is_descendant() {
        return;
    }
    let Some(entry_point) = context.entry_point() else {
        return;
    };
    if entry_point.same_page(current) || pages.iter().any(|p| p.same_page(entry_point)) {
        return;
    }
    debug!(entry_point = %entry_point.path, "Adding entry point page to export");
    pages.push(entry_point.clone());
}

/// Builds the key → model export of a page's descendants.
pub struct ExportAssembler<'a, R: ModelResolver> {
    tree: &'a dyn ContentTree,
    url_mapper: &'a dyn UrlMapper,
    resolver: &'a R,
}

impl<'a, R: ModelResolver> ExportAssembler<'a, R> {
    pub fn new(tree: &'a dyn ContentTree, url_mapper: &'a dyn UrlMapper, resolver: &'a R) -> Self {
        Self {
            tree,
            url_mapper,
            resolver,
        }
    }

    /// Assemble the export of `page`'s descendants.
    ///
    /// Fails only on malformed structure patterns. Pages without content or without a
    /// resolvable model are skipped.
    #[instrument(skip_all, fields(page = %page.path, descendant = context.is_descendant()))]
    pub fn assemble(
        &self,
        page: &Page,
        context: &TraversalContext,
        options: &ExportOptions,
        style: Option<&dyn Style>,
    ) -> Result<ExportRecord<R::Model>, HierarchyError> {
        let patterns = resolve_structure_patterns(options.structure_patterns.as_deref(), style)?;
        let depth = structure_depth(style);

        let mut pages =
            DescendantWalker::new(self.tree).descendants(Some(page), context, &patterns, depth);
        reconcile_entry_point(context, page, &mut pages);

        // descendants must not expand descendants of their own
        let descendant_context = context.as_descendant();

        let mut record = ExportRecord::new();
        for candidate in &pages {
            if !self.tree.has_content(candidate) {
                debug!(page = %candidate.path, "Skipping page without content");
                continue;
            }
            let candidate_context = descendant_context.for_page(candidate, None);
            let Some(model) = self.resolver.resolve_model(&candidate_context, candidate) else {
                debug!(page = %candidate.path, "No model resolved for page");
                continue;
            };
            let key = self.export_key(candidate, options);
            if record.insert(key.clone(), model).is_some() {
                debug!(key = %key, page = %candidate.path, "Duplicate export key replaced");
            }
        }

        debug!(
            depth,
            patterns = ?patterns.as_strs(),
            candidates = pages.len(),
            exported = record.len(),
            "Assembled export"
        );
        Ok(record)
    }

    fn export_key(&self, page: &Page, options: &ExportOptions) -> String {
        if options.author_mode {
            page.path.clone()
        } else {
            self.url_mapper.export_url(page, false, options.use_extension)
        }
    }
}
