//! Core data model for scan results.
//!
//! Every type here is plain data: serializable, free of callbacks and
//! caches, safe to hand across the export boundary. Issues are immutable
//! once constructed and belong to exactly one owner list — a component,
//! an environment variable, or the scan's general issue list.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How serious a diagnostic finding is.
///
/// Ordering puts `Critical` first so that an ascending sort yields the
/// most severe issues at the top of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Severity::Critical => "Critical",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        };
        f.write_str(label)
    }
}

/// A single diagnostic finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanIssue {
    /// Human-readable text.
    pub description: String,

    /// Severity of the finding.
    pub severity: Severity,

    /// Free-form grouping (e.g., "Version", "Environment", "System").
    pub category: String,

    /// Back-reference to the component this issue concerns, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,

    /// Filesystem path the issue concerns, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_path: Option<PathBuf>,
}

impl ScanIssue {
    /// Create a new issue.
    pub fn new(description: &str, severity: Severity, category: &str) -> Self {
        Self {
            description: description.to_string(),
            severity,
            category: category.to_string(),
            component_id: None,
            related_path: None,
        }
    }

    /// Attach the owning component's id.
    pub fn for_component(mut self, component_id: &str) -> Self {
        self.component_id = Some(component_id.to_string());
        self
    }

    /// Attach the filesystem path the issue concerns.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.related_path = Some(path.into());
        self
    }
}

/// Update availability resolved through a package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// Latest version the manager reports.
    pub latest_version: String,

    /// Manager identifier (e.g., "brew", "apt").
    pub package_manager_id: String,

    /// Manager display name (e.g., "Homebrew", "APT").
    pub package_manager_name: String,

    /// The tool's package name within that manager.
    pub package_name_in_pm: String,

    /// Command the user can run to upgrade (never executed by envaudit).
    pub update_command: String,

    /// Whether the latest version compares strictly greater than installed.
    pub is_update_available: bool,
}

/// One discovered tool instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedComponent {
    /// Stable identifier, unique within a scan.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Category label (e.g., "Language", "VCS").
    pub category: String,

    /// Extracted version, or "unknown" when extraction failed.
    pub version: String,

    /// Containing directory, or equal to the executable.
    pub path: PathBuf,

    /// The resolved binary.
    pub executable_path: PathBuf,

    /// Canonical catalog label that produced the match, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_db_name: Option<String>,

    /// Supplementary key/value facts (architecture, config snippets).
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub details: BTreeMap<String, String>,

    /// Issues attached to this component.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub issues: Vec<ScanIssue>,

    /// Update availability, when cross-referencing resolved one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_info: Option<UpdateInfo>,
}

impl DetectedComponent {
    /// Create a component whose `path` equals its executable.
    pub fn new(id: &str, name: &str, category: &str, version: &str, executable: PathBuf) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            version: version.to_string(),
            path: executable.clone(),
            executable_path: executable,
            matched_db_name: None,
            details: BTreeMap::new(),
            issues: Vec::new(),
            update_info: None,
        }
    }

    /// Attach an issue to this component.
    pub fn push_issue(&mut self, issue: ScanIssue) {
        self.issues.push(issue);
    }
}

/// One environment variable snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentVariableInfo {
    /// Variable name.
    pub name: String,

    /// Raw value, never truncated here (display truncation is a report concern).
    pub value: String,

    /// Opaque scope classification reported by the enumeration step.
    pub scope: String,

    /// Issues specific to this variable.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub issues: Vec<ScanIssue>,
}

impl EnvironmentVariableInfo {
    /// Create a variable snapshot with no issues yet.
    pub fn new(name: &str, value: &str, scope: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            scope: scope.to_string(),
            issues: Vec::new(),
        }
    }
}

/// Aggregate counters for a finished scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    pub components: usize,
    pub variables: usize,
    pub issues: usize,

    /// True when the scan was cancelled before completing all stages.
    pub cancelled: bool,

    /// Wall-clock duration of the scan.
    pub duration_ms: u64,
}

/// The aggregate result of one scan, sorted deterministically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub components: Vec<DetectedComponent>,
    pub environment_variables: Vec<EnvironmentVariableInfo>,
    pub issues: Vec<ScanIssue>,
    pub summary: ScanSummary,
}

impl ScanResult {
    /// Assemble a result, applying the canonical sort orders.
    pub fn assemble(
        mut components: Vec<DetectedComponent>,
        mut environment_variables: Vec<EnvironmentVariableInfo>,
        mut issues: Vec<ScanIssue>,
        summary: ScanSummary,
    ) -> Self {
        components.sort_by(|a, b| {
            (&a.category, &a.name, &a.version).cmp(&(&b.category, &b.name, &b.version))
        });
        environment_variables.sort_by(|a, b| a.name.cmp(&b.name));
        issues.sort_by(|a, b| {
            (a.severity, &a.category, &a.description).cmp(&(b.severity, &b.category, &b.description))
        });
        Self {
            components,
            environment_variables,
            issues,
            summary,
        }
    }

    /// Generic key/value representation for reporting and export.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
