//! pagetree
//!
//! Hierarchy resolution and bounded descendant export for content page trees: find the
//! hierarchy root of a page, collect its descendants under a depth limit and structure
//! patterns, and assemble them into an ordered URL-keyed export.

pub mod cli;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod logging;
pub mod model;
pub mod policy;
pub mod style;
pub mod tree;
pub mod types;
pub mod url;
