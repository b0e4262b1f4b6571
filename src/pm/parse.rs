//! Parsing of package-manager query output.
//!
//! Three output families cover every supported manager. Anything
//! unrecognized parses to `None` — never a panic, never an error.

use regex::Regex;

use crate::pm::detect::OutputStyle;

/// Extract the latest available version of `package` from manager output.
pub fn parse_latest_version(output: &str, style: OutputStyle, package: &str) -> Option<String> {
    match style {
        OutputStyle::Debian => parse_debian(output),
        OutputStyle::Homebrew => parse_homebrew(output, package),
        OutputStyle::Tabular => parse_tabular(output, package),
    }
}

/// Debian-style field lines: prefer `Candidate:`, fall back to `Version:`,
/// first match wins. Also tolerates the padded `Version      :` form that
/// dnf and pacman print.
fn parse_debian(output: &str) -> Option<String> {
    for key in ["Candidate", "Version"] {
        for line in output.lines() {
            if let Some((field, value)) = line.split_once(':') {
                if field.trim() == key {
                    let value = value.trim();
                    if !value.is_empty() && value != "(none)" {
                        return Some(value.to_string());
                    }
                }
            }
        }
    }
    None
}

/// Homebrew-style headers: `<pkg>: stable <version> (bottled), HEAD`, with
/// a bare `<pkg>: <version>` fallback for versioned formula names like
/// `python@3.9: 3.9.12`.
fn parse_homebrew(output: &str, package: &str) -> Option<String> {
    let escaped = regex::escape(package);

    let stable = Regex::new(&format!(r"(?m)^(?:==> )?{escaped}: stable ([^\s,]+)")).ok()?;
    if let Some(caps) = stable.captures(output) {
        return Some(caps[1].to_string());
    }

    let simple = Regex::new(&format!(r"(?m)^(?:==> )?{escaped}: ([^\s,]+)")).ok()?;
    simple.captures(output).map(|caps| caps[1].to_string())
}

/// Column-based listings: the row whose identifier token equals the target
/// package yields the token that follows it as the version. Works for
/// winget/choco search tables and `snap find` output alike.
fn parse_tabular(output: &str, package: &str) -> Option<String> {
    for line in output.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if let Some(pos) = tokens.iter().position(|token| *token == package) {
            if let Some(version) = tokens.get(pos + 1) {
                return Some((*version).to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debian_prefers_candidate_over_version() {
        let output = "Package: python3\nVersion: 3.9.2-1ubuntu1\nCandidate: 3.9.7-1~20.04\n";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Debian, "python3").as_deref(),
            Some("3.9.7-1~20.04")
        );
    }

    #[test]
    fn debian_falls_back_to_version_line() {
        let output = "\
Package: python3
Status: install ok installed
Architecture: amd64
Source: python3-defaults (3.8.2-0ubuntu2)
Version: 3.8.2-0ubuntu2
Depends: python3.8 (>= 3.8.2-1~)
Description: interactive high-level object-oriented language
";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Debian, "python3").as_deref(),
            Some("3.8.2-0ubuntu2")
        );
    }

    #[test]
    fn debian_none_candidate_falls_through() {
        let output = "Candidate: (none)\nVersion: 1.2.3\n";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Debian, "x").as_deref(),
            Some("1.2.3")
        );
    }

    #[test]
    fn debian_tolerates_padded_field_names() {
        let output = "Name         : git\nVersion      : 2.43.0-1\nRelease      : 1.fc39\n";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Debian, "git").as_deref(),
            Some("2.43.0-1")
        );
    }

    #[test]
    fn homebrew_stable_line_with_suffixes() {
        let output = "git: stable 2.30.1 (bottled), HEAD\n";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Homebrew, "git").as_deref(),
            Some("2.30.1")
        );
    }

    #[test]
    fn homebrew_simple_form_for_versioned_formulae() {
        let output = "python@3.9: 3.9.12\n";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Homebrew, "python@3.9").as_deref(),
            Some("3.9.12")
        );
    }

    #[test]
    fn homebrew_arrow_prefixed_header() {
        let output = "==> git: stable 2.40.0 (bottled), HEAD\n";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Homebrew, "git").as_deref(),
            Some("2.40.0")
        );
    }

    #[test]
    fn homebrew_wrong_package_yields_none() {
        let output = "git: stable 2.30.1 (bottled), HEAD\n";
        assert!(parse_latest_version(output, OutputStyle::Homebrew, "node").is_none());
    }

    #[test]
    fn tabular_finds_row_by_identifier_column() {
        let output = "\
Name        Id                 Version   Matched By
----------------------------------------------------
Python 3.11  Python.Python.3.11  3.11.4   Moniker
Python 3.10  Python.Python.3.10  3.10.11  Moniker
Git          Git.Git             2.40.0   Moniker
";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Tabular, "Python.Python.3.10").as_deref(),
            Some("3.10.11")
        );
        assert_eq!(
            parse_latest_version(output, OutputStyle::Tabular, "Git.Git").as_deref(),
            Some("2.40.0")
        );
        assert!(
            parse_latest_version(output, OutputStyle::Tabular, "NonExistent.Package").is_none()
        );
    }

    #[test]
    fn tabular_handles_snap_find_listing() {
        let output = "\
Name      Version   Publisher   Notes    Summary
code      1.84.2    vscode**    classic  Code editing. Redefined.
code-insiders  1.85.0  vscode**  classic  Insiders build
";
        assert_eq!(
            parse_latest_version(output, OutputStyle::Tabular, "code").as_deref(),
            Some("1.84.2")
        );
    }

    #[test]
    fn unrecognized_output_yields_none() {
        let garbage = "Some unexpected output";
        assert!(parse_latest_version(garbage, OutputStyle::Debian, "git").is_none());
        assert!(parse_latest_version(garbage, OutputStyle::Homebrew, "git").is_none());
        assert!(parse_latest_version(garbage, OutputStyle::Tabular, "git").is_none());
        assert!(parse_latest_version("", OutputStyle::Debian, "git").is_none());
    }
}
