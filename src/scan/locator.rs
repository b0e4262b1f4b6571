//! Executable resolution over the search path.
//!
//! Resolves bare executable names by walking the PATH directories in order.
//! Does NOT shell out to `which` — `which` behavior varies across systems
//! and is sometimes a shell builtin with inconsistent error handling.
//!
//! Results (including not-found, to avoid a negative-lookup storm) are
//! memoized per name for the lifetime of one scan; a scan assumes a stable
//! PATH, so the cache is keyed by name only.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Candidate file names to probe for a bare executable name.
#[cfg(windows)]
fn candidate_names(name: &str) -> Vec<String> {
    if Path::new(name).extension().is_some() {
        vec![name.to_string()]
    } else {
        vec![
            format!("{name}.exe"),
            format!("{name}.cmd"),
            format!("{name}.bat"),
            name.to_string(),
        ]
    }
}

#[cfg(not(windows))]
fn candidate_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

/// Resolves bare executable names to canonical absolute paths, memoized.
#[derive(Debug)]
pub struct ExecutableLocator {
    search_path: Vec<PathBuf>,
    cache: HashMap<String, Option<PathBuf>>,
}

impl ExecutableLocator {
    /// Locator over the current process's PATH.
    pub fn new() -> Self {
        Self::with_search_path(parse_system_path())
    }

    /// Locator over an explicit directory list (used by tests and by scans
    /// that augment the search path).
    pub fn with_search_path(search_path: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            cache: HashMap::new(),
        }
    }

    /// Resolve `name` to a canonical absolute path, or `None` if not found.
    ///
    /// The second lookup for the same name is answered from the cache
    /// without touching the filesystem.
    pub fn locate(&mut self, name: &str) -> Option<PathBuf> {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }
        let resolved = self.probe(name);
        self.cache.insert(name.to_string(), resolved.clone());
        resolved
    }

    fn probe(&self, name: &str) -> Option<PathBuf> {
        for dir in &self.search_path {
            // PATH entries that don't exist are skipped without error;
            // flagging them is the environment analyzer's job.
            if !dir.is_dir() {
                continue;
            }
            for candidate in candidate_names(name) {
                let path = dir.join(&candidate);
                if path.is_file() && is_executable(&path) {
                    // Resolve symlinks to a canonical absolute path.
                    return Some(fs::canonicalize(&path).unwrap_or(path));
                }
            }
        }
        None
    }
}

impl Default for ExecutableLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn locates_first_match_in_path_order() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("ruby"));
        create_fake_binary(&dir_b.join("ruby"));

        let mut locator = ExecutableLocator::with_search_path(vec![dir_a.clone(), dir_b]);
        let resolved = locator.locate("ruby").unwrap();
        assert_eq!(resolved, fs::canonicalize(dir_a.join("ruby")).unwrap());
    }

    #[test]
    fn missing_name_returns_none() {
        let temp = TempDir::new().unwrap();
        let mut locator = ExecutableLocator::with_search_path(vec![temp.path().to_path_buf()]);
        assert!(locator.locate("no-such-tool").is_none());
    }

    #[test]
    fn nonexistent_path_dirs_are_skipped() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real");
        create_fake_binary(&real.join("git"));

        let mut locator = ExecutableLocator::with_search_path(vec![
            PathBuf::from("/nonexistent/entry"),
            real.clone(),
        ]);
        assert!(locator.locate("git").is_some());
    }

    #[cfg(unix)]
    #[test]
    fn skips_non_executable_files() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tool"), "not executable").unwrap();

        let mut locator = ExecutableLocator::with_search_path(vec![dir]);
        assert!(locator.locate("tool").is_none());
    }

    #[test]
    fn positive_result_is_cached_without_reprobing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");
        create_fake_binary(&dir.join("node"));

        let mut locator = ExecutableLocator::with_search_path(vec![dir.clone()]);
        let first = locator.locate("node");
        assert!(first.is_some());

        // Remove the file; a cached lookup must not notice.
        fs::remove_file(dir.join("node")).unwrap();
        let second = locator.locate("node");
        assert_eq!(first, second);
    }

    #[test]
    fn negative_result_is_cached_without_reprobing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");
        fs::create_dir_all(&dir).unwrap();

        let mut locator = ExecutableLocator::with_search_path(vec![dir.clone()]);
        assert!(locator.locate("python3").is_none());

        // Creating the binary afterwards must not change the cached answer.
        create_fake_binary(&dir.join("python3"));
        assert!(locator.locate("python3").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolves_symlinks_to_canonical_path() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");
        let target = temp.path().join("opt").join("real-python");
        create_fake_binary(&target);
        fs::create_dir_all(&dir).unwrap();
        std::os::unix::fs::symlink(&target, dir.join("python3")).unwrap();

        let mut locator = ExecutableLocator::with_search_path(vec![dir]);
        let resolved = locator.locate("python3").unwrap();
        assert_eq!(resolved, fs::canonicalize(&target).unwrap());
    }
}
