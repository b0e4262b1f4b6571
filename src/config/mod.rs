//! Persisted configuration.
//!
//! Read once per scan and handed to the scanner as an immutable options
//! value; the file format is pretty-printed JSON in the user's config
//! directory.

pub mod loader;
pub mod schema;

pub use loader::{
    config_file_path, load_config, load_config_from, save_config, save_config_to,
    CONFIG_FILE_NAME, CORRUPT_BACKUP_SUFFIX,
};
pub use schema::{AuditConfig, LoggingConfig, ScanOptions};
