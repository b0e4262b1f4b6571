//! Envaudit - developer environment auditing.
//!
//! Envaudit discovers installed development tools and their versions,
//! inspects environment variables for misconfiguration, and cross-checks
//! installed versions against what package managers report as latest. It
//! only detects and reports — it never installs, upgrades, or modifies
//! anything on the system.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Persisted configuration loading and saving
//! - [`error`] - Error types and result aliases
//! - [`pm`] - Package-manager detection, parsing, and update resolution
//! - [`report`] - Report rendering (text, markdown, JSON, HTML)
//! - [`scan`] - The scanning and analysis engine
//!
//! # Example
//!
//! ```no_run
//! use envaudit::config::ScanOptions;
//! use envaudit::scan::{EnvironmentScanner, NullObserver, TOOL_CATALOG};
//!
//! let observer = NullObserver;
//! let scanner = EnvironmentScanner::new(ScanOptions::default(), TOOL_CATALOG, &observer);
//! let result = scanner.run_scan().unwrap();
//! for component in &result.components {
//!     println!("{} {} at {}", component.name, component.version, component.path.display());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pm;
pub mod report;
pub mod scan;

pub use error::{AuditError, Result};
pub use scan::{EnvironmentScanner, ScanResult};
