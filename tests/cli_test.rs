//! CLI-level tests through the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn envaudit() -> Command {
    Command::cargo_bin("envaudit").unwrap()
}

#[test]
fn help_lists_subcommands() {
    envaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("tools"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn tools_lists_catalog_entries() {
    envaudit()
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("Git"))
        .stdout(predicate::str::contains("VCS"));
}

#[test]
fn tools_json_is_parseable() {
    let output = envaudit().args(["tools", "--json"]).output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert!(entries.iter().any(|e| e["id"] == "python"));
}

#[test]
fn config_show_creates_and_prints_defaults() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.json");

    envaudit()
        .args(["config", "show", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("scan_options"))
        .stdout(predicate::str::contains("ignored_tools_identifiers"));

    assert!(config_path.exists());
}

#[test]
fn config_ignore_round_trips() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.json");

    envaudit()
        .args(["config", "ignore", "docker", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("docker"));

    envaudit()
        .args(["config", "show", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("docker"));

    envaudit()
        .args(["config", "unignore", "docker", "--config"])
        .arg(&config_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&config_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        parsed["ignored_tools_identifiers"].as_array().unwrap().len(),
        0
    );
}
