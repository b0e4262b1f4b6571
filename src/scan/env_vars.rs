//! Environment variable analysis.
//!
//! Enumerates the process environment and attaches diagnostics to the
//! variables that warrant them: path-list variables get per-entry
//! existence and duplicate checks, `*_HOME` variables get a directory
//! existence check. Enumeration order is irrelevant — the orchestrator
//! sorts the final list by name.

use std::collections::HashSet;
use std::path::Path;

use crate::scan::types::{EnvironmentVariableInfo, ScanIssue, Severity};

/// Variables whose values are ordered lists of directories.
pub const PATH_LIST_VARS: &[&str] = &[
    "PATH",
    "LD_LIBRARY_PATH",
    "DYLD_LIBRARY_PATH",
    "PYTHONPATH",
    "CLASSPATH",
    "GOPATH",
];

/// Scope reported for variables read from the process environment.
///
/// The enumeration step is the only source of scope values; no other
/// scope categories are invented here.
pub const SESSION_SCOPE: &str = "active_session";

const ISSUE_CATEGORY: &str = "Environment";

/// Analyze the current process environment.
///
/// Values that are not valid UTF-8 are recorded lossily rather than
/// aborting the enumeration.
pub fn analyze_environment() -> Vec<EnvironmentVariableInfo> {
    analyze_vars(std::env::vars_os().map(|(name, value)| {
        (
            name.to_string_lossy().into_owned(),
            value.to_string_lossy().into_owned(),
        )
    }))
}

/// Analyze an explicit set of `(name, value)` pairs.
///
/// Split out from [`analyze_environment`] so tests can inject fabricated
/// environments without mutating the real one.
pub fn analyze_vars<I>(vars: I) -> Vec<EnvironmentVariableInfo>
where
    I: IntoIterator<Item = (String, String)>,
{
    vars.into_iter()
        .map(|(name, value)| analyze_one(&name, &value))
        .collect()
}

/// Produce the snapshot and diagnostics for a single variable.
pub fn analyze_one(name: &str, value: &str) -> EnvironmentVariableInfo {
    let mut info = EnvironmentVariableInfo::new(name, value, SESSION_SCOPE);

    // Empty values are recorded but never generate existence issues.
    if value.is_empty() {
        return info;
    }

    if is_path_list_var(name) {
        analyze_path_list(name, value, &mut info.issues);
    } else if name.ends_with("_HOME") {
        analyze_home_var(name, value, &mut info.issues);
    }

    info
}

/// Whether a variable's value is a platform-separated directory list.
pub fn is_path_list_var(name: &str) -> bool {
    PATH_LIST_VARS
        .iter()
        .any(|known| name.eq_ignore_ascii_case(known))
}

fn analyze_path_list(name: &str, value: &str, issues: &mut Vec<ScanIssue>) {
    let mut seen: HashSet<String> = HashSet::new();

    for entry in std::env::split_paths(value) {
        let entry_str = entry.to_string_lossy().to_string();
        if entry_str.is_empty() {
            continue;
        }

        // First occurrence is never flagged; repeats are.
        if !seen.insert(entry_str.clone()) {
            issues.push(
                ScanIssue::new(
                    &format!("Duplicate entry {} in {}", entry_str, name),
                    Severity::Info,
                    ISSUE_CATEGORY,
                )
                .with_path(entry.clone()),
            );
        }

        if !entry.exists() {
            issues.push(
                ScanIssue::new(
                    &format!("{} entry does not exist: {}", name, entry_str),
                    Severity::Warning,
                    ISSUE_CATEGORY,
                )
                .with_path(entry),
            );
        }
    }
}

fn analyze_home_var(name: &str, value: &str, issues: &mut Vec<ScanIssue>) {
    let path = Path::new(value);
    if !path.is_dir() {
        issues.push(
            ScanIssue::new(
                &format!("{} does not point to an existing directory: {}", name, value),
                Severity::Warning,
                ISSUE_CATEGORY,
            )
            .with_path(path.to_path_buf()),
        );
    }
}
