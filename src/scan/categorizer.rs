//! Classification of discovered binaries against the tool catalog.

use std::path::Path;

use crate::scan::catalog::ToolSpec;

/// Classify a discovered binary by display name and resolved path.
///
/// Matching is primarily by normalized name — the bare executable name,
/// the catalog id, or the canonical display name, case-insensitive and
/// with Windows launcher extensions stripped. When several catalog entries
/// claim the same name, path hints break the tie. No match yields
/// `(None, None)`; the caller records the binary as a generic,
/// uncategorized component rather than dropping it.
pub fn categorize(
    name: &str,
    path: &Path,
    catalog: &[ToolSpec],
) -> (Option<String>, Option<String>) {
    let normalized = normalize(name);
    let matches: Vec<&ToolSpec> = catalog
        .iter()
        .filter(|spec| spec_matches(spec, &normalized))
        .collect();

    let chosen = match matches.len() {
        0 => None,
        1 => Some(matches[0]),
        // Tie: prefer the entry whose path hints appear in the resolved path.
        _ => {
            let path_str = path.to_string_lossy().to_lowercase();
            matches
                .iter()
                .find(|spec| {
                    spec.path_hints
                        .iter()
                        .any(|hint| path_str.contains(&hint.to_lowercase()))
                })
                .copied()
                .or(Some(matches[0]))
        }
    };

    match chosen {
        Some(spec) => (
            Some(spec.category.to_string()),
            Some(spec.name.to_string()),
        ),
        None => (None, None),
    }
}

fn spec_matches(spec: &ToolSpec, normalized: &str) -> bool {
    if normalize(spec.id) == normalized || normalize(spec.name) == normalized {
        return true;
    }
    spec.unix_executables
        .iter()
        .chain(spec.windows_executables.iter())
        .any(|candidate| normalize(candidate) == normalized)
}

fn normalize(name: &str) -> String {
    let lower = name.to_lowercase();
    for suffix in [".exe", ".cmd", ".bat"] {
        if let Some(stripped) = lower.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    lower
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::catalog::TOOL_CATALOG;
    use std::path::PathBuf;

    #[test]
    fn matches_by_executable_name() {
        let (category, db_name) =
            categorize("python3", &PathBuf::from("/usr/bin/python3"), TOOL_CATALOG);
        assert_eq!(category.as_deref(), Some("Language"));
        assert_eq!(db_name.as_deref(), Some("Python"));
    }

    #[test]
    fn matches_by_display_name() {
        let (category, db_name) =
            categorize("Git", &PathBuf::from("/usr/bin/git"), TOOL_CATALOG);
        assert_eq!(category.as_deref(), Some("VCS"));
        assert_eq!(db_name.as_deref(), Some("Git"));
    }

    #[test]
    fn strips_windows_launcher_extension() {
        let (category, db_name) = categorize(
            "git.exe",
            &PathBuf::from("C:\\Program Files\\Git\\cmd\\git.exe"),
            TOOL_CATALOG,
        );
        assert_eq!(category.as_deref(), Some("VCS"));
        assert_eq!(db_name.as_deref(), Some("Git"));
    }

    #[test]
    fn unmatched_binary_yields_none_pair() {
        let (category, db_name) = categorize(
            "my-inhouse-tool",
            &PathBuf::from("/opt/inhouse/bin/my-inhouse-tool"),
            TOOL_CATALOG,
        );
        assert!(category.is_none());
        assert!(db_name.is_none());
    }

    #[test]
    fn path_hint_breaks_ties_between_entries_sharing_a_name() {
        static AMBIGUOUS: &[ToolSpec] = &[
            ToolSpec {
                id: "oracle-java",
                name: "Oracle JDK",
                category: "Language",
                unix_executables: &["java"],
                windows_executables: &["java.exe"],
                version_args: &["-version"],
                version_pattern: r"([0-9.]+)",
                update_check: false,
                path_hints: &["oracle"],
            },
            ToolSpec {
                id: "openjdk",
                name: "OpenJDK",
                category: "Language",
                unix_executables: &["java"],
                windows_executables: &["java.exe"],
                version_args: &["-version"],
                version_pattern: r"([0-9.]+)",
                update_check: false,
                path_hints: &["openjdk"],
            },
        ];

        let (_, db_name) = categorize(
            "java",
            &PathBuf::from("/usr/lib/jvm/openjdk-17/bin/java"),
            AMBIGUOUS,
        );
        assert_eq!(db_name.as_deref(), Some("OpenJDK"));

        // No hint matches: first entry wins deterministically.
        let (_, db_name) = categorize("java", &PathBuf::from("/opt/other/java"), AMBIGUOUS);
        assert_eq!(db_name.as_deref(), Some("Oracle JDK"));
    }
}
