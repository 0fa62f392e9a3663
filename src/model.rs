//! Page Models
//!
//! [`ModelResolver`] is the seam through which the export engine obtains the model of
//! each page. [`PageModelResolver`] is the built-in resolver: it exports a page's own
//! fields and, for hierarchy pages, the assembled descendant map.

use crate::error::HierarchyError;
use crate::hierarchy::{ExportAssembler, ExportOptions, ExportRecord, TraversalContext};
use crate::style::{Style, StyleSource};
use crate::tree::{ContentTree, Page};
use crate::types::{HierarchyType, PN_REMOTE_SPA_URL};
use crate::url::UrlMapper;
use serde::Serialize;
use tracing::warn;

/// Model resolver interface
pub trait ModelResolver {
    type Model;

    /// Resolve the model of `page`; `None` when the page has no model
    fn resolve_model(&self, context: &TraversalContext, page: &Page) -> Option<Self::Model>;
}

const REMOTE_PAGE_SUFFIX: &str = "/remotepage";
const EXPERIENCE_FRAGMENT_SUFFIX: &str = "/xf-page";

/// Export strategy of a page, chosen from its resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Hierarchy page exporting its descendants
    Standard,
    /// Hierarchy page rendering a remotely hosted application
    Remote,
    /// Experience fragment page: exported without hierarchy data
    ExperienceFragment,
}

impl PageKind {
    pub fn of(page: &Page) -> Self {
        match page.resource_type.as_deref() {
            Some(rt) if rt.ends_with(REMOTE_PAGE_SUFFIX) => PageKind::Remote,
            Some(rt) if rt.ends_with(EXPERIENCE_FRAGMENT_SUFFIX) => PageKind::ExperienceFragment,
            _ => PageKind::Standard,
        }
    }

    pub fn exports_hierarchy(self) -> bool {
        !matches!(self, PageKind::ExperienceFragment)
    }
}

/// Exported page model
#[derive(Debug, Clone, Serialize)]
pub struct PageExport {
    #[serde(rename = ":path")]
    pub path: String,
    #[serde(rename = ":type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(rename = ":hierarchyType", skip_serializing_if = "Option::is_none")]
    pub hierarchy_type: Option<HierarchyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "remoteSPAUrl", skip_serializing_if = "Option::is_none")]
    pub remote_spa_url: Option<String>,
    #[serde(rename = ":children", skip_serializing_if = "Option::is_none")]
    pub children: Option<ExportRecord<PageExport>>,
}

/// Built-in page model resolver
pub struct PageModelResolver<'a> {
    tree: &'a dyn ContentTree,
    styles: &'a dyn StyleSource,
    url_mapper: &'a dyn UrlMapper,
    options: ExportOptions,
}

impl<'a> PageModelResolver<'a> {
    pub fn new(
        tree: &'a dyn ContentTree,
        styles: &'a dyn StyleSource,
        url_mapper: &'a dyn UrlMapper,
        options: ExportOptions,
    ) -> Self {
        Self {
            tree,
            styles,
            url_mapper,
            options,
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a page, surfacing structure pattern errors
    pub fn export(
        &self,
        context: &TraversalContext,
        page: &Page,
    ) -> Result<PageExport, HierarchyError> {
        let kind = PageKind::of(page);
        let children = if kind.exports_hierarchy() {
            let style = self.styles.style(page);
            let assembler = ExportAssembler::new(self.tree, self.url_mapper, self);
            Some(assembler.assemble(
                page,
                context,
                &self.options,
                style.as_ref().map(|s| s as &dyn Style),
            )?)
        } else {
            None
        };

        Ok(PageExport {
            path: page.path.clone(),
            resource_type: page.resource_type.clone(),
            hierarchy_type: kind.exports_hierarchy().then_some(HierarchyType::Page),
            title: page.title.clone(),
            remote_spa_url: match kind {
                PageKind::Remote => page.string_property(PN_REMOTE_SPA_URL).map(str::to_string),
                _ => None,
            },
            children,
        })
    }
}

impl ModelResolver for PageModelResolver<'_> {
    type Model = PageExport;

    fn resolve_model(&self, context: &TraversalContext, page: &Page) -> Option<PageExport> {
        match self.export(context, page) {
            Ok(model) => Some(model),
            Err(e) => {
                warn!(page = %page.path, error = %e, "Failed to export page model");
                None
            }
        }
    }
}
