//! Version extraction and comparison.
//!
//! Extraction runs a tool's version-query command through the process
//! runner and pulls the first capture group of the catalog's pattern out
//! of the combined output. Extraction failure is never fatal: the caller
//! records an "unknown" version and moves on.

use std::cmp::Ordering;
use std::path::Path;
use std::time::Duration;

use regex::Regex;

use crate::scan::process::run_command;

/// Placeholder recorded when no version could be extracted.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Fixed bound for version-query invocations.
const VERSION_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Run `executable` with `args` and extract a version token via `pattern`.
///
/// Returns `None` when the executable does not exist (short-circuits
/// without spawning), the command exits non-zero, times out, or the
/// pattern finds no match. The pattern's first capture group is the
/// version token; both stdout and stderr are searched, since plenty of
/// tools (JVMs, notably) print their version to stderr.
pub fn extract_version(executable: &Path, args: &[&str], pattern: &str) -> Option<String> {
    if !executable.exists() {
        return None;
    }
    let regex = match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(e) => {
            tracing::warn!("invalid version pattern {:?}: {}", pattern, e);
            return None;
        }
    };

    let output = run_command(executable, args, Some(VERSION_QUERY_TIMEOUT));
    if !output.success() {
        return None;
    }

    let combined = format!("{}\n{}", output.stdout, output.stderr);
    regex
        .captures(&combined)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Compare two version strings.
///
/// Attempts a numeric comparison of dot-separated components, left to
/// right, with missing components treated as zero. If either string has a
/// component that is not a plain number, both are compared as plain
/// strings instead. Deterministic for any fixed pair of inputs — the
/// fallback trigger is parse failure, nothing else.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_components(a), parse_components(b)) {
        (Some(left), Some(right)) => compare_components(&left, &right),
        _ => a.cmp(b),
    }
}

/// Whether `latest` compares strictly greater than `installed`.
pub fn is_newer_version(latest: &str, installed: &str) -> bool {
    compare_versions(latest, installed) == Ordering::Greater
}

fn parse_components(version: &str) -> Option<Vec<u64>> {
    let trimmed = version.trim().trim_start_matches('v');
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .split('.')
        .map(|component| component.parse::<u64>().ok())
        .collect()
}

fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        match left.cmp(&right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
