//! CLI commands run against the built binary

use super::test_utils::{write_fixture, SITE_FIXTURE};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(workspace: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagetree"))
        .env("XDG_CONFIG_HOME", workspace.join("xdg"))
        .env("PAGETREE_LOG", "off")
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_export_json() {
    let temp_dir = TempDir::new().unwrap();
    let tree = write_fixture(temp_dir.path(), SITE_FIXTURE);

    let output = run(
        temp_dir.path(),
        &["export", "--tree", tree.to_str().unwrap(), "--page", "/content/site"],
    );
    assert!(
        output.status.success(),
        "export should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[":path"], "/content/site");
    let keys: Vec<&String> = json[":children"].as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["/content/site/en.html", "/content/site/en/about.html"]
    );
}

#[test]
fn test_export_with_entry_and_patterns_in_author_mode() {
    let temp_dir = TempDir::new().unwrap();
    let tree = write_fixture(temp_dir.path(), SITE_FIXTURE);

    let output = run(
        temp_dir.path(),
        &[
            "export",
            "--tree",
            tree.to_str().unwrap(),
            "--page",
            "/content/site",
            "--entry",
            "/content/site/en/about/team",
            "--structure-patterns",
            "about$",
            "--author",
        ],
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keys: Vec<&String> = json[":children"].as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["/content/site/en/about", "/content/site/en/about/team"]
    );
}

#[test]
fn test_root_command_json() {
    let temp_dir = TempDir::new().unwrap();
    let tree = write_fixture(temp_dir.path(), SITE_FIXTURE);

    let output = run(
        temp_dir.path(),
        &[
            "root",
            "--tree",
            tree.to_str().unwrap(),
            "--page",
            "/content/site/en/about/team",
            "--format",
            "json",
        ],
    );
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["root_page"], "/content/site");
    assert_eq!(json["is_root_page"], false);
    assert_eq!(json["root_json_export_url"], "/content/site.model.json");
}

#[test]
fn test_export_table_uses_workspace_context_path() {
    let temp_dir = TempDir::new().unwrap();
    let tree = write_fixture(temp_dir.path(), SITE_FIXTURE);
    std::fs::write(
        temp_dir.path().join("pagetree.toml"),
        "[hierarchy]\ncontext_path = \"/ctx\"\n",
    )
    .unwrap();

    let output = run(
        temp_dir.path(),
        &[
            "export",
            "--tree",
            tree.to_str().unwrap(),
            "--page",
            "/content/site",
            "--format",
            "text",
        ],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("/ctx/content/site/en.html"));
    assert!(stdout.contains("English"));
}

#[test]
fn test_unknown_page_fails() {
    let temp_dir = TempDir::new().unwrap();
    let tree = write_fixture(temp_dir.path(), SITE_FIXTURE);

    let output = run(
        temp_dir.path(),
        &["root", "--tree", tree.to_str().unwrap(), "--page", "/content/missing"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/content/missing"));
}

#[test]
fn test_invalid_patterns_fail() {
    let temp_dir = TempDir::new().unwrap();
    let tree = write_fixture(temp_dir.path(), SITE_FIXTURE);

    let output = run(
        temp_dir.path(),
        &[
            "export",
            "--tree",
            tree.to_str().unwrap(),
            "--page",
            "/content/site",
            "--structure-patterns",
            "[unclosed",
        ],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[unclosed"));
}
