//! Package-manager integration tests with fabricated manager binaries.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use envaudit::pm::{detect_package_managers, resolve_update};
use envaudit::scan::locator::ExecutableLocator;
use tempfile::TempDir;

fn fake_tool(dir: &Path, name: &str, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn preferred(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn resolves_update_through_fake_homebrew() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fake_tool(&bin, "brew", "echo 'git: stable 2.40.0 (bottled), HEAD'");

    let mut locator = ExecutableLocator::with_search_path(vec![bin]);
    let detected = detect_package_managers(&mut locator);
    assert!(detected.contains_key("brew"));
    assert_eq!(detected["brew"].name, "Homebrew");

    let update = resolve_update("git", "2.39.0", &preferred(&["brew"]), &detected, &mut locator)
        .expect("update should resolve");

    assert_eq!(update.latest_version, "2.40.0");
    assert_eq!(update.package_manager_id, "brew");
    assert_eq!(update.package_manager_name, "Homebrew");
    assert_eq!(update.package_name_in_pm, "git");
    assert_eq!(update.update_command, "brew upgrade git");
    assert!(update.is_update_available);
}

#[test]
fn up_to_date_install_reports_no_update() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fake_tool(&bin, "brew", "echo 'git: stable 2.40.0 (bottled), HEAD'");

    let mut locator = ExecutableLocator::with_search_path(vec![bin]);
    let detected = detect_package_managers(&mut locator);

    let update = resolve_update("git", "2.40.0", &preferred(&["brew"]), &detected, &mut locator)
        .expect("update should resolve");
    assert!(!update.is_update_available);
}

#[test]
fn failing_query_command_yields_none() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fake_tool(&bin, "brew", "echo 'Error occurred' >&2; exit 1");

    let mut locator = ExecutableLocator::with_search_path(vec![bin]);
    let detected = detect_package_managers(&mut locator);

    let update = resolve_update("git", "1.0", &preferred(&["brew"]), &detected, &mut locator);
    assert!(update.is_none());
}

#[test]
fn unparseable_output_yields_none() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    fake_tool(&bin, "brew", "echo 'Some unexpected output'");

    let mut locator = ExecutableLocator::with_search_path(vec![bin]);
    let detected = detect_package_managers(&mut locator);

    let update = resolve_update("git", "1.0", &preferred(&["brew"]), &detected, &mut locator);
    assert!(update.is_none());
}

#[test]
fn no_detected_manager_yields_none() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("empty");
    fs::create_dir_all(&empty).unwrap();

    let mut locator = ExecutableLocator::with_search_path(vec![empty]);
    let detected = detect_package_managers(&mut locator);
    assert!(detected.is_empty());

    let update = resolve_update("git", "1.0", &preferred(&["brew"]), &detected, &mut locator);
    assert!(update.is_none());
}

#[test]
fn versioned_formula_resolves_via_simple_form() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("bin");
    // `brew info python` on a versioned formula prints the bare form.
    fake_tool(&bin, "brew", "echo 'python: 3.12.1'");

    let mut locator = ExecutableLocator::with_search_path(vec![bin]);
    let detected = detect_package_managers(&mut locator);

    let update = resolve_update("python", "3.9.5", &preferred(&["brew"]), &detected, &mut locator)
        .expect("update should resolve");
    assert_eq!(update.latest_version, "3.12.1");
    assert!(update.is_update_available);
    assert_eq!(update.update_command, "brew upgrade python");
}
