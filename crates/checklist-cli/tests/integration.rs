#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn mcp_checklist(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mcp-checklist").unwrap();
    cmd.current_dir(cwd).env_remove("MCP_REPO_PATH");
    cmd
}

/// A repository directory with a predictable name inside a temp dir.
fn repo(dir: &TempDir) -> PathBuf {
    let root = dir.path().join("widget");
    std::fs::create_dir_all(&root).unwrap();
    root
}

// ---------------------------------------------------------------------------
// generate / report
// ---------------------------------------------------------------------------

#[test]
fn generates_checklist_from_readme() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);
    std::fs::write(
        root.join("README.md"),
        "# Widget\n\n## MCP Job\nA\nB\n## Other\nC\n",
    )
    .unwrap();

    mcp_checklist(dir.path())
        .args(["--repo", root.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No checklist found"))
        .stdout(predicate::str::contains("Wrote"));

    let content = std::fs::read_to_string(root.join(".mcp/checklist.yaml")).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    assert_eq!(doc["metadata"]["name"].as_str(), Some("widget Checklist"));
    assert_eq!(doc["tasks"][2]["id"].as_str(), Some("job-from-readme"));
    assert_eq!(doc["tasks"][2]["description"].as_str(), Some("A B"));
}

#[test]
fn second_run_reports_existing_checklist() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root).assert().success();
    let path = root.join(".mcp/checklist.yaml");
    let first = std::fs::read_to_string(&path).unwrap();

    mcp_checklist(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 checklist(s):"))
        .stdout(predicate::str::contains("checklist.yaml"))
        .stdout(predicate::str::contains("Wrote").not());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn existing_yml_suppresses_generation() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);
    std::fs::create_dir_all(root.join(".mcp")).unwrap();
    std::fs::write(root.join(".mcp/agent.yml"), "version: 1\n").unwrap();

    mcp_checklist(dir.path())
        .arg(root.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("agent.yml"));
    assert!(!root.join(".mcp/checklist.yaml").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("Automated job for widget."));
    assert!(!root.join(".mcp").exists());
}

#[test]
fn dryrun_alias_is_accepted() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root).arg("--dryrun").assert().success();
    assert!(!root.join(".mcp").exists());
}

#[test]
fn env_path_beats_positional() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);
    let other = dir.path().join("other");
    std::fs::create_dir_all(&other).unwrap();

    mcp_checklist(dir.path())
        .env("MCP_REPO_PATH", &root)
        .arg(other.to_str().unwrap())
        .assert()
        .success();
    assert!(root.join(".mcp/checklist.yaml").exists());
    assert!(!other.join(".mcp").exists());
}

#[test]
fn unknown_flags_are_ignored() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root)
        .args(["--dry-run", "--future-option=1", "--verbose-ish"])
        .assert()
        .success();
}

#[test]
fn json_output_describes_outcome() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    let out = mcp_checklist(&root)
        .args(["--dry-run", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["outcome"].as_str(), Some("preview"));
    assert!(value["content"].as_str().unwrap().contains("bootstrap-deps"));
}

#[test]
fn help_lists_options() {
    let dir = TempDir::new().unwrap();
    mcp_checklist(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--repo"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn double_dash_h_prints_help_without_writing() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root)
        .arg("--h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
    assert!(!root.join(".mcp").exists());
}

#[test]
fn dry_run_with_value_is_a_dry_run() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root)
        .arg("--dry-run=true")
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"));
    mcp_checklist(&root).arg("--dryrun=yes").assert().success();
    assert!(!root.join(".mcp").exists());
}

#[test]
fn bare_repo_flag_falls_back_to_cwd() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root).arg("--repo").assert().success();
    assert!(root.join(".mcp/checklist.yaml").exists());
}

#[test]
fn bare_repo_flag_falls_back_to_env() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(dir.path())
        .env("MCP_REPO_PATH", &root)
        .args(["--repo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("widget"));
    assert!(!root.join(".mcp").exists());
    assert!(!dir.path().join(".mcp").exists());
}

// ---------------------------------------------------------------------------
// introduce
// ---------------------------------------------------------------------------

#[test]
fn introduce_lists_tasks() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);
    mcp_checklist(&root).assert().success();

    mcp_checklist(&root)
        .arg("introduce")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap-deps, run-tests, job-from-readme"));
}

#[test]
fn introduce_without_checklist() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root)
        .arg("introduce")
        .assert()
        .success()
        .stdout(predicate::str::contains("No checklist found"));
    assert!(!root.join(".mcp").exists());
}

// ---------------------------------------------------------------------------
// bootstrap
// ---------------------------------------------------------------------------

#[test]
fn bootstrap_with_nothing_to_run_succeeds() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root)
        .arg("bootstrap")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to run"));
}

#[test]
fn bootstrap_cpp_fails() {
    let dir = TempDir::new().unwrap();
    let root = repo(&dir);

    mcp_checklist(&root)
        .args(["tdd", "--language", "cpp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bootstrap failed"));
}
