//! CLI route: single route table and run context. Dispatches to the hierarchy engine and
//! presentation.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{format_export, format_root, RootSummary};
use crate::config::{ConfigLoader, PagetreeConfig};
use crate::error::{ApiError, HierarchyError};
use crate::hierarchy::{ExportOptions, HierarchyRoot, TraversalContext};
use crate::model::PageModelResolver;
use crate::style::{Style, StyleSource};
use crate::tree::{ContentTree, InMemoryTree, Page};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Runtime context for CLI execution: loaded configuration.
pub struct RunContext {
    config: PagetreeConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(&workspace_root, config_path.as_deref())?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PagetreeConfig {
        &self.config
    }

    /// Execute a command, returning its rendered output
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Export {
                tree,
                page,
                entry,
                structure_patterns,
                author,
                no_extension,
                format,
            } => {
                let mut options = self.config.hierarchy.export_options();
                options.structure_patterns = structure_patterns.clone();
                options.author_mode |= *author;
                options.use_extension &= !*no_extension;
                self.handle_export(tree, page, entry.as_deref(), options, *format)
            }
            Commands::Root {
                tree,
                page,
                author,
                format,
            } => self.handle_root(tree, page, *author, *format),
        }
    }

    #[instrument(skip(self, options, format), fields(tree = %tree_path.display()))]
    fn handle_export(
        &self,
        tree_path: &Path,
        page: &str,
        entry: Option<&str>,
        options: ExportOptions,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let tree = InMemoryTree::load(tree_path)?;
        let current = lookup(&tree, page)?;
        let entry_point = entry.map(|path| lookup(&tree, path)).transpose()?;

        let mapper = self.config.hierarchy.url_mapper();
        let context = TraversalContext::new(current.clone()).with_entry_point(entry_point);
        let resolver = PageModelResolver::new(&tree, &tree, &mapper, options);
        let export = resolver.export(&context, &current)?;

        info!(
            page = %current.path,
            exported = export.children.as_ref().map(|c| c.len()).unwrap_or(0),
            "Export complete"
        );
        format_export(&export, format)
    }

    #[instrument(skip(self, format), fields(tree = %tree_path.display()))]
    fn handle_root(
        &self,
        tree_path: &Path,
        page: &str,
        author: bool,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        let tree = InMemoryTree::load(tree_path)?;
        let current = lookup(&tree, page)?;
        let style = tree.style(&current);

        let mapper = self.config.hierarchy.url_mapper();
        let mut options = self.config.hierarchy.export_options();
        options.author_mode |= author;
        let root = HierarchyRoot::new(
            &tree,
            &mapper,
            current.clone(),
            style.as_ref().map(|s| s as &dyn Style),
        )
        .with_options(options)
        .with_max_ancestor_hops(self.config.hierarchy.max_ancestor_hops);

        let summary = RootSummary {
            page: current.path.clone(),
            is_root_page: root.is_root_page(),
            root_page: root.root_page().map(|p| p.path.clone()),
            root_json_export_url: root.json_export_url(),
        };
        format_root(&summary, format)
    }
}

fn lookup(tree: &dyn ContentTree, path: &str) -> Result<Page, ApiError> {
    tree.page(path)
        .ok_or_else(|| HierarchyError::PageNotFound(path.to_string()).into())
}
