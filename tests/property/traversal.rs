//! Property-based tests for traversal bounds, pattern filtering and root resolution

use pagetree::hierarchy::{DescendantWalker, RootResolver, StructurePatterns, TraversalContext};
use pagetree::tree::{ContentTree, InMemoryTree, PageSpec};
use pagetree::types::PN_IS_ROOT;
use proptest::prelude::*;

/// Build a tree from a parent list: page `i + 1` hangs below page `parents[i] % (i + 1)`
fn build_tree(parents: &[usize]) -> (InMemoryTree, Vec<String>) {
    let tree = InMemoryTree::new();
    let mut paths = vec!["/root".to_string()];
    tree.insert(PageSpec::new("/root"));
    for (i, parent) in parents.iter().enumerate() {
        let parent_path = paths[parent % (i + 1)].clone();
        let path = format!("{}/p{}", parent_path, i + 1);
        tree.insert(PageSpec::new(path.clone()));
        paths.push(path);
    }
    (tree, paths)
}

fn walk(tree: &InMemoryTree, patterns: &StructurePatterns, depth: i32) -> Vec<String> {
    let root = tree.page("/root").unwrap();
    let context = TraversalContext::new(root.clone());
    DescendantWalker::new(tree)
        .descendants(Some(&root), &context, patterns, depth)
        .into_iter()
        .map(|p| p.path)
        .collect()
}

#[test]
fn test_zero_depth_exports_nothing() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(any::<usize>(), 0..40), |parents| {
            let (tree, _) = build_tree(&parents);
            assert!(walk(&tree, &StructurePatterns::default(), 0).is_empty());
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_negative_depth_exports_every_descendant_once() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(any::<usize>(), 0..40), i32::MIN..0),
            |(parents, depth)| {
                let (tree, paths) = build_tree(&parents);
                let mut exported = walk(&tree, &StructurePatterns::default(), depth);
                exported.sort();
                let mut expected = paths[1..].to_vec();
                expected.sort();
                assert_eq!(exported, expected);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_positive_depth_bounds_generations() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(any::<usize>(), 0..40), 1..6i32),
            |(parents, depth)| {
                let (tree, paths) = build_tree(&parents);
                let exported = walk(&tree, &StructurePatterns::default(), depth);
                let generation = |path: &str| path.matches('/').count() - 1;
                let expected = paths[1..]
                    .iter()
                    .filter(|p| generation(p) <= depth as usize)
                    .count();
                assert_eq!(exported.len(), expected);
                Ok(())
            },
        )
        .unwrap();
}

#[test]
fn test_pattern_on_deepest_page_of_chain() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(2..12usize), |length| {
            // a plain chain: every page hangs below the previous one
            let parents: Vec<usize> = (0..length).collect();
            let (tree, paths) = build_tree(&parents);
            let last = paths.last().unwrap().clone();
            let patterns = StructurePatterns::parse(&format!("^{}$", last)).unwrap();
            assert_eq!(walk(&tree, &patterns, -1), vec![last]);
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_root_resolution_finds_nearest_flagged_ancestor() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(any::<bool>(), 1..16), |flags| {
            let tree = InMemoryTree::new();
            let mut path = String::new();
            let mut chain = Vec::new();
            for (i, flag) in flags.iter().enumerate() {
                path = format!("{}/p{}", path, i);
                tree.insert(
                    PageSpec::new(path.clone())
                        .structure_support()
                        .policy_flag(PN_IS_ROOT, *flag),
                );
                chain.push(path.clone());
            }

            let start = tree.page(chain.last().unwrap()).unwrap();
            let resolver = RootResolver::new(&tree);
            let first = resolver.resolve(&start).unwrap();
            let second = resolver.resolve(&start).unwrap();
            assert_eq!(first, second);

            let expected = flags
                .iter()
                .rposition(|flag| *flag)
                .map(|idx| chain[idx].clone());
            assert_eq!(first.map(|p| p.path), expected);
            Ok(())
        })
        .unwrap();
}
