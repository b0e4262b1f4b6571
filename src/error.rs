//! Error types for envaudit operations.
//!
//! This module defines [`AuditError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AuditError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors
//! - Expected scan-time failures (a tool missing, a manager's output not
//!   parsing, a version query timing out) are never errors — they become
//!   `ScanIssue`s or absent data on the scan result

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envaudit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Failed to parse the persisted configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// No usable configuration location on this system.
    #[error("No configuration directory available: {message}")]
    ConfigDirUnavailable { message: String },

    /// The scan pipeline could not be started at all.
    #[error("Scan could not start: {message}")]
    ScanSetup { message: String },

    /// Writing a rendered report to disk failed.
    #[error("Failed to write report to {path}: {message}")]
    ReportExport { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envaudit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
