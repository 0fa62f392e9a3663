//! Hierarchy Engine
//!
//! Root discovery by ancestor walk, bounded and filtered descendant traversal, traversal
//! context propagation and export assembly.

pub mod context;
pub mod descendants;
pub mod export;
pub mod patterns;
pub mod root;
pub mod root_export;

pub use context::{ComponentContext, PageScopedContext, RequestContext, TraversalContext};
pub use descendants::DescendantWalker;
pub use export::{reconcile_entry_point, ExportAssembler, ExportOptions, ExportRecord};
pub use patterns::{resolve_structure_patterns, StructurePatterns};
pub use root::{RootResolver, DEFAULT_MAX_ANCESTOR_HOPS};
pub use root_export::HierarchyRoot;
