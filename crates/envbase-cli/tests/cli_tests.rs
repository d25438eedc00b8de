//! End-to-end tests for the `envbase` binary.
//!
//! Each test drives the compiled binary against a temporary workspace
//! and asserts on exit status, stdout/stderr, and filesystem effects.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn envbase() -> Command {
    Command::cargo_bin("envbase").unwrap()
}

/// Lay down a minimal project: production base plus one override env.
fn seed_project(root: &Path) {
    fs::create_dir_all(root.join("production")).unwrap();
    fs::write(
        root.join("production/config.toml"),
        "project_id = \"shop-production\"\nport = 54321\n",
    )
    .unwrap();
    fs::write(root.join("production/seed.sql"), "select 1;\n").unwrap();

    fs::create_dir_all(root.join("local")).unwrap();
    fs::write(root.join("local/config.toml"), "project_id = \"shop-production\"\n").unwrap();

    fs::write(root.join("project.json"), r#"{ "name": "shop" }"#).unwrap();
}

// ── build ─────────────────────────────────────────────────────────────────────

#[test]
fn build_materializes_override_environment() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("apps/shop");
    seed_project(&project);

    envbase()
        .args(["build", project.to_str().unwrap()])
        .assert()
        .success();

    let generated = project.join(".generated/local");
    assert!(generated.join("config.toml").exists());
    // Inherited from the base, untouched by the override.
    assert!(generated.join("seed.sql").exists());
    // Identity rewritten for the target environment.
    let config = fs::read_to_string(generated.join("config.toml")).unwrap();
    assert!(config.contains("project_id = \"shop-local\""));
    // The base is used in place, never copied.
    assert!(!project.join(".generated/production").exists());
}

#[test]
fn build_without_base_fails_with_user_error() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("apps/empty");
    fs::create_dir_all(project.join("local")).unwrap();

    envbase()
        .args(["build", project.to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("production"));

    assert!(!project.join(".generated").exists());
}

#[test]
fn build_is_idempotent_and_cleans_stray_files() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("apps/shop");
    seed_project(&project);

    envbase()
        .args(["build", project.to_str().unwrap()])
        .assert()
        .success();

    // Plant a file the next build must remove.
    fs::write(project.join(".generated/local/stale.txt"), "old").unwrap();

    envbase()
        .args(["build", project.to_str().unwrap()])
        .assert()
        .success();

    assert!(!project.join(".generated/local/stale.txt").exists());
    assert!(project.join(".generated/local/config.toml").exists());
}

// ── scan ──────────────────────────────────────────────────────────────────────

#[test]
fn scan_prints_task_graph_json() {
    let temp = TempDir::new().unwrap();
    seed_project(&temp.path().join("apps/shop"));

    let output = envbase()
        .args(["scan", "--workspace-root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let results = parsed.as_array().unwrap();
    assert_eq!(results.len(), 1);

    let project = &results[0]["projects"]["apps/shop"];
    assert_eq!(project["name"], "shop");
    assert_eq!(project["targets"]["build"]["executor"], "envbase:build");
    assert_eq!(
        project["targets"]["start"]["options"]["command"],
        "supabase start"
    );
    assert_eq!(
        project["targets"]["start"]["dependsOn"][0],
        "build"
    );
}

#[test]
fn scan_empty_workspace_prints_empty_list() {
    let temp = TempDir::new().unwrap();

    envbase()
        .args(["scan", "--workspace-root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[]"));
}

#[test]
fn scan_respects_options_file() {
    let temp = TempDir::new().unwrap();
    seed_project(&temp.path().join("apps/shop"));
    fs::write(
        temp.path().join("envbase.toml"),
        "buildTargetName = \"compose\"\n",
    )
    .unwrap();

    let output = envbase()
        .args(["scan", "--workspace-root", temp.path().to_str().unwrap()])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let targets = &parsed[0]["projects"]["apps/shop"]["targets"];
    assert!(targets.get("compose").is_some());
    assert!(targets.get("build").is_none());
}

#[test]
fn scan_with_missing_explicit_config_exits_4() {
    let temp = TempDir::new().unwrap();

    envbase()
        .args([
            "scan",
            "--workspace-root",
            temp.path().to_str().unwrap(),
            "--config",
            "does-not-exist.toml",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn scan_missing_manifest_fails() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("apps/shop");
    seed_project(&project);
    fs::remove_file(project.join("project.json")).unwrap();

    envbase()
        .args(["scan", "--workspace-root", temp.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("project.json"));
}

// ── global flags ──────────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    envbase()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("envbase"))
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn version_flag_matches_cargo() {
    envbase()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_2() {
    envbase().arg("frobnicate").assert().failure().code(2);
}
