//! Content Page Tree
//!
//! The page tree is consumed through the [`ContentTree`] trait: navigation (parent,
//! children), content availability and the content policy provider. Storage is owned
//! by the host; [`memory::InMemoryTree`] is a reference implementation used by the CLI
//! and tests.

pub mod memory;
pub mod page;
pub mod path;

pub use memory::{InMemoryTree, PageSpec, TreeFixture};
pub use page::{Page, Template};

use crate::policy::PolicyProvider;

/// Tree provider interface
pub trait ContentTree: Send + Sync {
    /// Look up a page by path
    fn page(&self, path: &str) -> Option<Page>;

    /// Parent page, `None` at the top of the tree
    fn parent(&self, page: &Page) -> Option<Page>;

    /// Child pages in natural tree order.
    ///
    /// `None` means the page cannot list children; callers treat it like an empty list.
    fn children(&self, page: &Page) -> Option<Vec<Page>>;

    /// Whether the page has a loadable content resource
    fn has_content(&self, page: &Page) -> bool;

    /// Content policy provider resolved from the tree, if the tree exposes one
    fn policy_provider(&self) -> Option<&dyn PolicyProvider>;
}
