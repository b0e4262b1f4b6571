//! The scanning and analysis engine.
//!
//! Tool discovery, version extraction, environment-variable diagnostics,
//! categorization, and the orchestrator that sequences them. Everything
//! here detects and reports; nothing installs, upgrades, or modifies the
//! system.

pub mod catalog;
pub mod categorizer;
pub mod env_vars;
pub mod fs_scan;
pub mod locator;
pub mod observer;
pub mod process;
pub mod scanner;
pub mod types;
pub mod version;

pub use catalog::{ToolSpec, TOOL_CATALOG};
pub use observer::{NullObserver, ScanObserver};
pub use scanner::{CancelToken, EnvironmentScanner};
pub use types::{
    DetectedComponent, EnvironmentVariableInfo, ScanIssue, ScanResult, ScanSummary, Severity,
    UpdateInfo,
};
