//! Request-scoped traversal context
//!
//! A [`TraversalContext`] tells nested model resolution which page is "current", which
//! page the original request targeted (the entry point) and whether resolution happens
//! on behalf of a descendant. Contexts are immutable values: deriving a context for a
//! child page produces a new value and leaves the caller's context untouched, so sibling
//! resolutions never observe each other.

use crate::tree::Page;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Host component context: current page plus opaque request attributes
pub trait ComponentContext: Send + Sync + fmt::Debug {
    fn page(&self) -> Option<&Page>;
    fn attribute(&self, name: &str) -> Option<&Value>;
}

/// Component context created by the host at request entry
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    page: Option<Page>,
    attributes: BTreeMap<String, Value>,
}

impl RequestContext {
    pub fn new(page: Option<Page>) -> Self {
        Self {
            page,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl ComponentContext for RequestContext {
    fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// Read-through override reporting a fixed page as current
#[derive(Debug, Clone)]
pub struct PageScopedContext {
    base: Option<Arc<dyn ComponentContext>>,
    page: Page,
}

impl PageScopedContext {
    pub fn new(base: Option<Arc<dyn ComponentContext>>, page: Page) -> Self {
        Self { base, page }
    }
}

impl ComponentContext for PageScopedContext {
    fn page(&self) -> Option<&Page> {
        Some(&self.page)
    }

    fn attribute(&self, name: &str) -> Option<&Value> {
        self.base.as_ref()?.attribute(name)
    }
}

/// Immutable traversal context threaded through export and model resolution
#[derive(Debug, Clone)]
pub struct TraversalContext {
    current_page: Page,
    entry_point: Option<Page>,
    descendant: bool,
    component_context: Option<Arc<dyn ComponentContext>>,
}

impl TraversalContext {
    /// Top-level context for a request targeting `current_page`
    pub fn new(current_page: Page) -> Self {
        Self {
            current_page,
            entry_point: None,
            descendant: false,
            component_context: None,
        }
    }

    pub fn with_entry_point(mut self, entry_point: Option<Page>) -> Self {
        self.entry_point = entry_point;
        self
    }

    pub fn with_component_context(mut self, component_context: Arc<dyn ComponentContext>) -> Self {
        self.component_context = Some(component_context);
        self
    }

    pub fn current_page(&self) -> &Page {
        &self.current_page
    }

    pub fn entry_point(&self) -> Option<&Page> {
        self.entry_point.as_ref()
    }

    /// Whether resolution runs on behalf of a descendant; such pages do not expand
    /// descendants of their own
    pub fn is_descendant(&self) -> bool {
        self.descendant
    }

    pub fn component_context(&self) -> Option<&Arc<dyn ComponentContext>> {
        self.component_context.as_ref()
    }

    /// Page reported by the component context, falling back to the current page
    pub fn context_page(&self) -> &Page {
        self.component_context
            .as_ref()
            .and_then(|c| c.page())
            .unwrap_or(&self.current_page)
    }

    /// Derive a context scoped to `page`.
    ///
    /// The component context is replaced by a [`PageScopedContext`] over the current one;
    /// the descendant flag is inherited.
    pub fn for_page(&self, page: &Page, entry_point: Option<&Page>) -> Self {
        let scoped: Arc<dyn ComponentContext> = Arc::new(PageScopedContext::new(
            self.component_context.clone(),
            page.clone(),
        ));
        Self {
            current_page: page.clone(),
            entry_point: entry_point.cloned(),
            descendant: self.descendant,
            component_context: Some(scoped),
        }
    }

    /// Derive a context flagged as resolving on behalf of a descendant
    pub fn as_descendant(&self) -> Self {
        Self {
            descendant: true,
            ..self.clone()
        }
    }
}
