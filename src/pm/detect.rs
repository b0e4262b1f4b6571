//! Package manager definitions and detection.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::scan::locator::ExecutableLocator;

/// OS family a manager belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
    Windows,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// How a manager formats its version-query output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// `Candidate:` / `Version:` field lines (apt, dnf, pacman).
    Debian,
    /// `<pkg>: stable <version>` headers (Homebrew).
    Homebrew,
    /// Column-based listings (winget, choco, scoop, snap).
    Tabular,
}

/// Static definition of one known package manager.
pub struct ManagerDef {
    /// Stable identifier (e.g., "apt", "brew").
    pub id: &'static str,

    /// Display name (e.g., "APT", "Homebrew").
    pub display_name: &'static str,

    /// Executable whose presence means the manager is available. For apt
    /// this is `apt-get` — `apt` itself warns against script use.
    pub probe_executable: &'static str,

    /// Executable invoked for version queries (may differ from the probe,
    /// as with apt-get vs apt-cache).
    pub query_executable: &'static str,

    /// Query arguments preceding the package name.
    pub query_args: &'static [&'static str],

    /// How to parse the query output.
    pub style: OutputStyle,

    /// Upgrade command template; `{pkg}` is replaced with the package name.
    /// Synthesized for display only — envaudit never runs it.
    pub update_command: &'static str,

    /// OS families this manager is probed on.
    pub platforms: &'static [Platform],
}

/// All managers envaudit knows how to talk to.
pub const MANAGER_DEFS: &[ManagerDef] = &[
    ManagerDef {
        id: "apt",
        display_name: "APT",
        probe_executable: "apt-get",
        query_executable: "apt-cache",
        query_args: &["policy"],
        style: OutputStyle::Debian,
        update_command: "sudo apt-get install --only-upgrade {pkg}",
        platforms: &[Platform::Linux],
    },
    ManagerDef {
        id: "dnf",
        display_name: "DNF",
        probe_executable: "dnf",
        query_executable: "dnf",
        query_args: &["info"],
        style: OutputStyle::Debian,
        update_command: "sudo dnf upgrade {pkg}",
        platforms: &[Platform::Linux],
    },
    ManagerDef {
        id: "pacman",
        display_name: "Pacman",
        probe_executable: "pacman",
        query_executable: "pacman",
        query_args: &["-Si"],
        style: OutputStyle::Debian,
        update_command: "sudo pacman -S {pkg}",
        platforms: &[Platform::Linux],
    },
    ManagerDef {
        id: "snap",
        display_name: "Snap",
        probe_executable: "snap",
        query_executable: "snap",
        query_args: &["find"],
        style: OutputStyle::Tabular,
        update_command: "sudo snap refresh {pkg}",
        platforms: &[Platform::Linux],
    },
    ManagerDef {
        id: "brew",
        display_name: "Homebrew",
        probe_executable: "brew",
        query_executable: "brew",
        query_args: &["info"],
        style: OutputStyle::Homebrew,
        update_command: "brew upgrade {pkg}",
        platforms: &[Platform::MacOS, Platform::Linux],
    },
    ManagerDef {
        id: "winget",
        display_name: "Winget",
        probe_executable: "winget",
        query_executable: "winget",
        query_args: &["search", "--exact", "--id"],
        style: OutputStyle::Tabular,
        update_command: "winget upgrade --id {pkg}",
        platforms: &[Platform::Windows],
    },
    ManagerDef {
        id: "choco",
        display_name: "Chocolatey",
        probe_executable: "choco",
        query_executable: "choco",
        query_args: &["search", "--exact"],
        style: OutputStyle::Tabular,
        update_command: "choco upgrade {pkg}",
        platforms: &[Platform::Windows],
    },
    ManagerDef {
        id: "scoop",
        display_name: "Scoop",
        probe_executable: "scoop",
        query_executable: "scoop",
        query_args: &["search"],
        style: OutputStyle::Tabular,
        update_command: "scoop update {pkg}",
        platforms: &[Platform::Windows],
    },
];

/// A manager found on this system.
#[derive(Debug, Clone, Serialize)]
pub struct PackageManagerInfo {
    /// Display name.
    pub name: String,

    /// Resolved path of the probe executable.
    pub path: PathBuf,
}

/// Look up a manager definition by id.
pub fn find_manager(id: &str) -> Option<&'static ManagerDef> {
    MANAGER_DEFS.iter().find(|def| def.id == id)
}

/// The default preferred-manager order for the current OS family.
pub fn default_preferred_managers() -> Vec<String> {
    let platform = Platform::current();
    MANAGER_DEFS
        .iter()
        .filter(|def| def.platforms.contains(&platform))
        .map(|def| def.id.to_string())
        .collect()
}

/// Probe which managers are present, keyed by manager id.
///
/// Only managers for the current OS family are probed; only resolvable
/// ones appear in the result.
pub fn detect_package_managers(
    locator: &mut ExecutableLocator,
) -> BTreeMap<String, PackageManagerInfo> {
    let platform = Platform::current();
    let mut detected = BTreeMap::new();

    for def in MANAGER_DEFS {
        if !def.platforms.contains(&platform) {
            continue;
        }
        if let Some(path) = locator.locate(def.probe_executable) {
            tracing::debug!("package manager {} at {}", def.id, path.display());
            detected.insert(
                def.id.to_string(),
                PackageManagerInfo {
                    name: def.display_name.to_string(),
                    path,
                },
            );
        }
    }

    detected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(target_os = "linux")]
    fn create_fake_binary(path: &std::path::Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn manager_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for def in MANAGER_DEFS {
            assert!(seen.insert(def.id));
        }
    }

    #[test]
    fn find_manager_resolves_known_ids() {
        assert_eq!(find_manager("brew").unwrap().display_name, "Homebrew");
        assert_eq!(find_manager("apt").unwrap().probe_executable, "apt-get");
        assert!(find_manager("unknown_pm").is_none());
    }

    #[test]
    fn default_order_only_lists_current_platform() {
        let platform = Platform::current();
        for id in default_preferred_managers() {
            let def = find_manager(&id).unwrap();
            assert!(def.platforms.contains(&platform));
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn detects_apt_through_apt_get_probe() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("apt-get"));
        create_fake_binary(&bin.join("snap"));

        let mut locator = ExecutableLocator::with_search_path(vec![bin.clone()]);
        let detected = detect_package_managers(&mut locator);

        assert!(detected.contains_key("apt"));
        assert!(detected.contains_key("snap"));
        assert!(!detected.contains_key("brew"));
        assert_eq!(detected["apt"].name, "APT");
        assert_eq!(
            detected["apt"].path,
            fs::canonicalize(bin.join("apt-get")).unwrap()
        );
    }

    #[test]
    fn empty_search_path_detects_nothing() {
        let temp = TempDir::new().unwrap();
        let mut locator = ExecutableLocator::with_search_path(vec![temp.path().to_path_buf()]);
        assert!(detect_package_managers(&mut locator).is_empty());
    }
}
