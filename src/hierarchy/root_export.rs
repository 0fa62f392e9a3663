//! Hierarchy root queries for the current page: root page, root JSON export URL and
//! root model. The root page is resolved lazily, at most once per value.

use crate::error::HierarchyError;
use crate::hierarchy::context::TraversalContext;
use crate::hierarchy::export::ExportOptions;
use crate::hierarchy::root::RootResolver;
use crate::model::ModelResolver;
use crate::style::{is_root_page, Style};
use crate::tree::{ContentTree, Page};
use crate::url::{page_json_export_url, UrlMapper};
use std::sync::OnceLock;
use tracing::{error, warn};

/// Root queries bound to one request's current page
pub struct HierarchyRoot<'a> {
    tree: &'a dyn ContentTree,
    url_mapper: &'a dyn UrlMapper,
    current: Page,
    style: Option<&'a dyn Style>,
    options: ExportOptions,
    max_ancestor_hops: Option<usize>,
    root: OnceLock<Option<Page>>,
}

impl<'a> HierarchyRoot<'a> {
    pub fn new(
        tree: &'a dyn ContentTree,
        url_mapper: &'a dyn UrlMapper,
        current: Page,
        style: Option<&'a dyn Style>,
    ) -> Self {
        Self {
            tree,
            url_mapper,
            current,
            style,
            options: ExportOptions::default(),
            max_ancestor_hops: None,
            root: OnceLock::new(),
        }
    }

    pub fn with_options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_ancestor_hops(mut self, max_hops: usize) -> Self {
        self.max_ancestor_hops = Some(max_hops);
        self
    }

    pub fn current_page(&self) -> &Page {
        &self.current
    }

    /// Style-level root flag of the current page. Independent of the content-policy
    /// flag used by the ancestor walk.
    pub fn is_root_page(&self) -> bool {
        is_root_page(self.style)
    }

    /// Root page found by the ancestor walk, resolved on first use.
    ///
    /// Resolution failures are logged and reported as no root.
    pub fn root_page(&self) -> Option<&Page> {
        self.root.get_or_init(|| self.resolve_root()).as_ref()
    }

    fn resolve_root(&self) -> Option<Page> {
        let mut resolver = RootResolver::new(self.tree);
        if let Some(max_hops) = self.max_ancestor_hops {
            resolver = resolver.with_max_hops(max_hops);
        }
        match resolver.resolve(&self.current) {
            Ok(root) => root,
            Err(e @ HierarchyError::PolicyProviderUnavailable(_)) => {
                error!(page = %self.current.path, error = %e, "Root page resolution unavailable");
                None
            }
            Err(e) => {
                warn!(page = %self.current.path, error = %e, "Root page resolution aborted");
                None
            }
        }
    }

    /// JSON export URL of the hierarchy root: the current page when it is flagged as root
    /// in its style, otherwise the resolved root page.
    pub fn json_export_url(&self) -> Option<String> {
        let page = if self.is_root_page() {
            &self.current
        } else {
            self.root_page()?
        };
        page_json_export_url(
            self.url_mapper,
            page,
            self.options.author_mode,
            self.options.use_extension,
        )
    }

    /// Model of the hierarchy root.
    ///
    /// When the current page is the root its own model is resolved with `context`.
    /// Otherwise the root's model is resolved with a context scoped to the root page
    /// that records the current page as the entry point.
    pub fn root_model<R: ModelResolver>(
        &self,
        resolver: &R,
        context: &TraversalContext,
    ) -> Option<R::Model> {
        if self.is_root_page() {
            return resolver.resolve_model(context, &self.current);
        }
        let root = self.root_page()?;
        if !self.tree.has_content(root) {
            warn!(root = %root.path, "Root page has no content");
            return None;
        }
        let root_context = context.for_page(root, Some(&self.current));
        resolver.resolve_model(&root_context, root)
    }
}
