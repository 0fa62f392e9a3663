//! Configuration loading across sources

use super::test_utils::with_xdg_env;
use pagetree::config::{ConfigLoader, WORKSPACE_CONFIG_FILE};
use pagetree::error::ApiError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_without_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(&workspace, None)).unwrap();
    assert!(!config.hierarchy.author_mode);
    assert!(config.hierarchy.use_extension);
    assert_eq!(config.hierarchy.max_ancestor_hops, 1024);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    let config = with_xdg_env(&test_dir, || {
        let global = pagetree::config::global_config_path().unwrap();
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(
            &global,
            "[hierarchy]\ncontext_path = \"/global\"\nmax_ancestor_hops = 16\n",
        )
        .unwrap();
        fs::write(
            workspace.join(WORKSPACE_CONFIG_FILE),
            "[hierarchy]\ncontext_path = \"/workspace\"\n",
        )
        .unwrap();
        ConfigLoader::load(&workspace, None)
    })
    .unwrap();

    assert_eq!(config.hierarchy.context_path.as_deref(), Some("/workspace"));
    assert_eq!(config.hierarchy.max_ancestor_hops, 16);
}

#[test]
fn test_explicit_file_replaces_workspace_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    fs::write(
        workspace.join(WORKSPACE_CONFIG_FILE),
        "[hierarchy]\nauthor_mode = true\n",
    )
    .unwrap();
    let explicit = test_dir.path().join("explicit.toml");
    fs::write(&explicit, "[hierarchy]\nuse_extension = false\n").unwrap();

    let config =
        with_xdg_env(&test_dir, || ConfigLoader::load(&workspace, Some(&explicit))).unwrap();
    assert!(!config.hierarchy.author_mode);
    assert!(!config.hierarchy.use_extension);
}

#[test]
fn test_invalid_context_path_is_rejected() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    fs::write(
        workspace.join(WORKSPACE_CONFIG_FILE),
        "[hierarchy]\ncontext_path = \"relative\"\n",
    )
    .unwrap();

    let result = with_xdg_env(&test_dir, || ConfigLoader::load(&workspace, None));
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}
