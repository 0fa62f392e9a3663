//! Entry point reconciliation through the export assembler

use pagetree::hierarchy::{ExportAssembler, ExportOptions, TraversalContext};
use pagetree::model::{PageExport, PageModelResolver};
use pagetree::style::StyleProperties;
use pagetree::tree::{ContentTree, InMemoryTree, PageSpec};
use pagetree::types::{PN_STRUCTURE_DEPTH, PN_STRUCTURE_PATTERNS};
use pagetree::url::PublicUrlMapper;

fn tree() -> InMemoryTree {
    let tree = InMemoryTree::new();
    tree.insert(PageSpec::new("/a"));
    tree.insert(PageSpec::new("/a/b"));
    tree.insert(PageSpec::new("/a/b/c"));
    tree.insert(PageSpec::new("/a/d"));
    tree
}

fn author() -> ExportOptions {
    ExportOptions {
        author_mode: true,
        ..ExportOptions::default()
    }
}

fn assemble(tree: &InMemoryTree, entry: Option<&str>, style: &StyleProperties) -> Vec<String> {
    let mapper = PublicUrlMapper::new();
    let resolver = PageModelResolver::new(tree, tree, &mapper, author());
    let current = tree.page("/a").unwrap();
    let context = TraversalContext::new(current.clone())
        .with_entry_point(entry.map(|path| tree.page(path).unwrap()));

    let record = ExportAssembler::new(tree, &mapper, &resolver)
        .assemble(&current, &context, &author(), Some(style))
        .unwrap();
    record
        .into_iter()
        .map(|(key, model): (String, PageExport)| {
            assert_eq!(key, model.path);
            key
        })
        .collect()
}

#[test]
fn test_filtered_entry_point_is_still_exported() {
    let tree = tree();
    let style = StyleProperties::new()
        .with(PN_STRUCTURE_DEPTH, -1)
        .with(PN_STRUCTURE_PATTERNS, "^/a/d$");
    assert_eq!(assemble(&tree, Some("/a/b/c"), &style), vec!["/a/d", "/a/b/c"]);
}

#[test]
fn test_entry_point_equal_to_current_is_not_exported() {
    let tree = tree();
    let style = StyleProperties::new().with(PN_STRUCTURE_DEPTH, -1);
    assert_eq!(
        assemble(&tree, Some("/a"), &style),
        vec!["/a/b", "/a/b/c", "/a/d"]
    );
}

#[test]
fn test_entry_point_inside_export_is_not_duplicated() {
    let tree = tree();
    let style = StyleProperties::new().with(PN_STRUCTURE_DEPTH, -1);
    assert_eq!(
        assemble(&tree, Some("/a/b/c"), &style),
        vec!["/a/b", "/a/b/c", "/a/d"]
    );
}

#[test]
fn test_entry_point_beyond_depth_is_appended() {
    let tree = tree();
    let style = StyleProperties::new().with(PN_STRUCTURE_DEPTH, 1);
    assert_eq!(
        assemble(&tree, Some("/a/b/c"), &style),
        vec!["/a/b", "/a/d", "/a/b/c"]
    );
}

#[test]
fn test_entry_point_without_content_is_skipped() {
    let tree = tree();
    tree.insert(PageSpec::new("/a/b/c").without_content());
    let style = StyleProperties::new().with(PN_STRUCTURE_DEPTH, 1);
    assert_eq!(assemble(&tree, Some("/a/b/c"), &style), vec!["/a/b", "/a/d"]);
}
