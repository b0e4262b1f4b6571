//! Configuration schema definitions.
//!
//! Maps to the persisted JSON configuration file. The scanner itself only
//! consumes [`ScanOptions`], handed to it as an immutable value per scan.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Options controlling what a scan covers.
    pub scan_options: ScanOptions,

    /// Component identifiers suppressed from scan results.
    pub ignored_tools_identifiers: Vec<String>,

    /// Logging preferences.
    pub logging: LoggingConfig,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            scan_options: ScanOptions::default(),
            ignored_tools_identifiers: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AuditConfig {
    /// Scan options with the ignore-list folded in, ready for the scanner.
    pub fn effective_scan_options(&self) -> ScanOptions {
        let mut options = self.scan_options.clone();
        options
            .ignored_identifiers
            .extend(self.ignored_tools_identifiers.iter().cloned());
        options
    }

    /// Add an identifier to the ignore-list (idempotent).
    pub fn add_ignored_identifier(&mut self, id: &str) {
        if !self.ignored_tools_identifiers.iter().any(|x| x == id) {
            self.ignored_tools_identifiers.push(id.to_string());
        }
    }

    /// Remove an identifier from the ignore-list (no-op when absent).
    pub fn remove_ignored_identifier(&mut self, id: &str) {
        self.ignored_tools_identifiers.retain(|x| x != id);
    }
}

/// What a scan covers. Immutable for the duration of one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Roots for the filesystem sweep; empty disables the sweep.
    pub scan_paths: Vec<PathBuf>,

    /// Path prefixes excluded from the filesystem sweep.
    pub excluded_paths: Vec<PathBuf>,

    /// Whether to collect and analyze environment variables.
    pub scan_env_vars: bool,

    /// Whether to cross-reference components against package managers.
    pub cross_reference_tools: bool,

    /// Whether cross-referencing may run update checks.
    pub perform_update_checks: bool,

    /// Preferred manager order for update resolution; empty means the
    /// platform default.
    pub preferred_package_managers: Vec<String>,

    /// Component and tool identifiers suppressed from results.
    pub ignored_identifiers: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            scan_paths: vec![PathBuf::from("~")],
            excluded_paths: vec![PathBuf::from("~/Library"), PathBuf::from("/System")],
            scan_env_vars: true,
            cross_reference_tools: true,
            perform_update_checks: true,
            preferred_package_managers: Vec::new(),
            ignored_identifiers: Vec::new(),
        }
    }
}

impl ScanOptions {
    /// Whether a tool or component identifier is suppressed.
    pub fn is_ignored(&self, id: &str) -> bool {
        self.ignored_identifiers.iter().any(|x| x == id)
    }
}

/// Logging preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level name (e.g., "info", "debug").
    pub level: String,

    /// Optional log file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_enable_all_stages() {
        let options = ScanOptions::default();
        assert!(options.scan_env_vars);
        assert!(options.cross_reference_tools);
        assert!(options.perform_update_checks);
        assert!(!options.scan_paths.is_empty());
    }

    #[test]
    fn ignore_list_is_idempotent() {
        let mut config = AuditConfig::default();
        config.add_ignored_identifier("tool_id_1");
        config.add_ignored_identifier("tool_id_1");
        config.add_ignored_identifier("tool_id_2");
        assert_eq!(
            config.ignored_tools_identifiers,
            vec!["tool_id_1", "tool_id_2"]
        );

        config.remove_ignored_identifier("tool_id_1");
        assert_eq!(config.ignored_tools_identifiers, vec!["tool_id_2"]);

        // Removing an absent id is a no-op.
        config.remove_ignored_identifier("tool_id_nonexistent");
        assert_eq!(config.ignored_tools_identifiers.len(), 1);
    }

    #[test]
    fn effective_options_fold_in_ignore_list() {
        let mut config = AuditConfig::default();
        config.add_ignored_identifier("docker");
        let options = config.effective_scan_options();
        assert!(options.is_ignored("docker"));
        assert!(!options.is_ignored("git"));
    }

    #[test]
    fn partial_json_fills_missing_fields_from_defaults() {
        let json = r#"{"scan_options": {"scan_paths": ["/custom/only"], "scan_env_vars": false}}"#;
        let config: AuditConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.scan_options.scan_paths,
            vec![PathBuf::from("/custom/only")]
        );
        assert!(!config.scan_options.scan_env_vars);
        // Untouched sections come from defaults.
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = AuditConfig::default();
        config.scan_options.scan_paths = vec![PathBuf::from("/test/path")];
        config.add_ignored_identifier("tool_a");

        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AuditConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
