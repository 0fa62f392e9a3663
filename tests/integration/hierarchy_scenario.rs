//! End-to-end scenario: a flagged root above the current page with two children

use pagetree::hierarchy::{ExportOptions, HierarchyRoot, RootResolver, TraversalContext};
use pagetree::model::PageModelResolver;
use pagetree::style::{Style, StyleProperties, StyleSource};
use pagetree::tree::{ContentTree, InMemoryTree, PageSpec};
use pagetree::types::{PN_IS_ROOT, PN_STRUCTURE_DEPTH};
use pagetree::url::PublicUrlMapper;

fn scenario_tree() -> InMemoryTree {
    let tree = InMemoryTree::new();
    tree.insert(
        PageSpec::new("/content/root")
            .title("Root")
            .structure_support()
            .policy_flag(PN_IS_ROOT, true),
    );
    tree.insert(
        PageSpec::new("/content/root/current")
            .title("Current")
            .structure_support()
            .style(StyleProperties::new().with(PN_STRUCTURE_DEPTH, 5)),
    );
    tree.insert(PageSpec::new("/content/root/current/child1").title("Child 1"));
    tree.insert(PageSpec::new("/content/root/current/child2").title("Child 2"));
    tree
}

#[test]
fn test_export_and_root_url_for_current_page() {
    let tree = scenario_tree();
    let mapper = PublicUrlMapper::new().with_context_path("/site");
    let current = tree.page("/content/root/current").unwrap();
    let style = tree.style(&current);
    let style = style.as_ref().map(|s| s as &dyn Style);

    let root = HierarchyRoot::new(&tree, &mapper, current.clone(), style);
    assert!(!root.is_root_page());
    assert_eq!(root.root_page().unwrap().path, "/content/root");
    assert_eq!(
        root.json_export_url().as_deref(),
        Some("/site/content/root.model.json")
    );

    let resolver = PageModelResolver::new(&tree, &tree, &mapper, ExportOptions::default());
    let export = resolver
        .export(&TraversalContext::new(current.clone()), &current)
        .unwrap();
    let children = export.children.unwrap();
    assert_eq!(
        children.keys().collect::<Vec<_>>(),
        vec![
            "/site/content/root/current/child1.html",
            "/site/content/root/current/child2.html"
        ]
    );
    assert_eq!(
        children
            .get("/site/content/root/current/child2.html")
            .and_then(|m| m.title.as_deref()),
        Some("Child 2")
    );
}

#[test]
fn test_root_model_exports_from_root_with_entry_point() {
    let tree = scenario_tree();
    tree.insert(
        PageSpec::new("/content/root")
            .title("Root")
            .structure_support()
            .policy_flag(PN_IS_ROOT, true)
            .style(StyleProperties::new().with(PN_STRUCTURE_DEPTH, 1)),
    );
    let mapper = PublicUrlMapper::new();
    let options = ExportOptions {
        author_mode: true,
        ..ExportOptions::default()
    };
    let current = tree.page("/content/root/current/child1").unwrap();
    let root = HierarchyRoot::new(&tree, &mapper, current.clone(), None).with_options(options.clone());
    let resolver = PageModelResolver::new(&tree, &tree, &mapper, options);

    let model = root
        .root_model(&resolver, &TraversalContext::new(current))
        .unwrap();
    assert_eq!(model.path, "/content/root");
    // depth 1 reaches only /current; the entry point child1 is added after it
    assert_eq!(
        model.children.unwrap().keys().collect::<Vec<_>>(),
        vec!["/content/root/current", "/content/root/current/child1"]
    );
}

#[test]
fn test_root_resolution_is_inclusive_and_idempotent() {
    let tree = scenario_tree();
    let resolver = RootResolver::new(&tree);
    let root = tree.page("/content/root").unwrap();
    let child = tree.page("/content/root/current/child2").unwrap();

    assert_eq!(resolver.resolve(&root).unwrap().unwrap().path, "/content/root");
    let first = resolver.resolve(&child).unwrap();
    let second = resolver.resolve(&child).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.unwrap().path, "/content/root");

    tree.set_policy_flag("/content/root", PN_IS_ROOT, false);
    assert!(resolver.resolve(&child).unwrap().is_none());
}

#[test]
fn test_style_root_flag_overrides_ancestor_root() {
    let tree = scenario_tree();
    let mapper = PublicUrlMapper::new();
    let current = tree.page("/content/root/current").unwrap();
    let style = StyleProperties::new().with(PN_IS_ROOT, true);
    let root = HierarchyRoot::new(&tree, &mapper, current, Some(&style));

    assert!(root.is_root_page());
    assert_eq!(
        root.json_export_url().as_deref(),
        Some("/content/root/current.model.json")
    );
}
