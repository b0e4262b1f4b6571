//! Latest-version resolution and update command synthesis.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::pm::detect::{find_manager, PackageManagerInfo};
use crate::pm::mapping::pm_package_name;
use crate::pm::parse::parse_latest_version;
use crate::scan::locator::ExecutableLocator;
use crate::scan::process::run_command;
use crate::scan::types::UpdateInfo;
use crate::scan::version::is_newer_version;

/// Bound for a single manager query; repository metadata lookups can be
/// slow but must not hang a scan.
const PM_QUERY_TIMEOUT: Duration = Duration::from_secs(20);

/// Resolve the latest available version of a tool and synthesize its
/// update command.
///
/// Iterates `preferred` manager ids in order. The first manager that is
/// both detected and has a package mapping for the tool gets queried; a
/// manager whose query fails or whose output doesn't parse is skipped and
/// the next one is tried. Exhausting the list returns `None` — a normal
/// "cannot determine" outcome. Only read-only query subcommands are ever
/// invoked.
pub fn resolve_update(
    tool_id: &str,
    installed_version: &str,
    preferred: &[String],
    detected: &BTreeMap<String, PackageManagerInfo>,
    locator: &mut ExecutableLocator,
) -> Option<UpdateInfo> {
    for manager_id in preferred {
        let Some(def) = find_manager(manager_id) else {
            continue;
        };
        let Some(info) = detected.get(manager_id) else {
            continue;
        };
        let Some(package) = pm_package_name(tool_id, manager_id) else {
            continue;
        };

        // The query executable can differ from the probe (apt-cache vs
        // apt-get); fall back to the detected path when they match.
        let query_path = if def.query_executable == def.probe_executable {
            info.path.clone()
        } else {
            match locator.locate(def.query_executable) {
                Some(path) => path,
                None => continue,
            }
        };

        let mut args: Vec<&str> = def.query_args.to_vec();
        args.push(package);
        let output = run_command(&query_path, &args, Some(PM_QUERY_TIMEOUT));
        if !output.success() {
            tracing::debug!(
                "{} query for {} failed with exit code {}",
                manager_id,
                package,
                output.exit_code
            );
            continue;
        }

        let Some(latest) = parse_latest_version(&output.stdout, def.style, package) else {
            tracing::debug!("{} output for {} did not parse", manager_id, package);
            continue;
        };

        return Some(UpdateInfo {
            is_update_available: is_newer_version(&latest, installed_version),
            latest_version: latest,
            package_manager_id: manager_id.clone(),
            package_manager_name: info.name.clone(),
            package_name_in_pm: package.to_string(),
            update_command: def.update_command.replace("{pkg}", package),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn detected_brew() -> BTreeMap<String, PackageManagerInfo> {
        let mut map = BTreeMap::new();
        map.insert(
            "brew".to_string(),
            PackageManagerInfo {
                name: "Homebrew".to_string(),
                path: PathBuf::from("/usr/local/bin/brew"),
            },
        );
        map
    }

    #[test]
    fn undetected_manager_yields_none() {
        let detected = BTreeMap::new();
        let mut locator = ExecutableLocator::with_search_path(vec![]);
        let result = resolve_update(
            "git",
            "2.39.0",
            &["brew".to_string()],
            &detected,
            &mut locator,
        );
        assert!(result.is_none());
    }

    #[test]
    fn unmapped_tool_yields_none() {
        let detected = detected_brew();
        let mut locator = ExecutableLocator::with_search_path(vec![]);
        let result = resolve_update(
            "unknown_tool_id",
            "1.0",
            &["brew".to_string()],
            &detected,
            &mut locator,
        );
        assert!(result.is_none());
    }

    #[test]
    fn unknown_manager_id_is_skipped() {
        let detected = detected_brew();
        let mut locator = ExecutableLocator::with_search_path(vec![]);
        let result = resolve_update(
            "git",
            "1.0",
            &["no-such-manager".to_string()],
            &detected,
            &mut locator,
        );
        assert!(result.is_none());
    }
}
