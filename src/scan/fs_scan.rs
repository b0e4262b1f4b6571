//! Filesystem sweep for portable tool installs.
//!
//! PATH resolution misses tools that were unpacked somewhere without a
//! PATH entry — portable VS Code builds, a Go toolchain under `~/sdk`,
//! and the like. The sweep walks the configured scan paths to a bounded
//! depth looking for catalog candidate executables that PATH resolution
//! did not already find. Unreadable directories are skipped silently.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::scan::catalog::ToolSpec;
use crate::scan::locator::is_executable;

/// Depth bound for the sweep; deep trees are overwhelmingly node_modules
/// and build output, not tool installs.
const MAX_SWEEP_DEPTH: usize = 4;

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Walk `scan_paths` for candidate executables of the given specs.
///
/// `wanted` maps candidate file names to their catalog entries. Returns at
/// most one hit per catalog entry (the first encountered), as
/// `(spec, executable_path)` pairs. Paths under any of `excluded` are
/// skipped entirely.
pub fn sweep_for_candidates<'a>(
    scan_paths: &[PathBuf],
    excluded: &[PathBuf],
    wanted: &HashMap<&'static str, &'a ToolSpec>,
) -> Vec<(&'a ToolSpec, PathBuf)> {
    let excluded: Vec<PathBuf> = excluded.iter().map(|p| expand_tilde(p)).collect();
    let mut found: HashMap<&str, (&'a ToolSpec, PathBuf)> = HashMap::new();

    for root in scan_paths {
        let root = expand_tilde(root);
        if !root.is_dir() {
            continue;
        }

        let walker = WalkDir::new(&root)
            .max_depth(MAX_SWEEP_DEPTH)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry.path(), &excluded));

        for entry in walker.filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            let Some(&spec) = wanted.get(file_name) else {
                continue;
            };
            if found.contains_key(spec.id) {
                continue;
            }
            if is_executable(entry.path()) {
                tracing::debug!(
                    "filesystem sweep found {} at {}",
                    spec.id,
                    entry.path().display()
                );
                found.insert(spec.id, (spec, entry.path().to_path_buf()));
            }
        }
    }

    found.into_values().collect()
}

fn is_excluded(path: &Path, excluded: &[PathBuf]) -> bool {
    excluded.iter().any(|prefix| path.starts_with(prefix))
}
