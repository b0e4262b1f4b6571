//! Configuration loading and persistence.
//!
//! The config lives as pretty-printed JSON under the user's config
//! directory. A missing file is created from defaults; a corrupt file is
//! moved aside to `<name>.corrupt_backup` and replaced with defaults, so
//! a damaged config never blocks a scan.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::AuditConfig;
use crate::error::{AuditError, Result};

/// File name of the persisted configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Suffix appended to an unparseable config before it is replaced.
pub const CORRUPT_BACKUP_SUFFIX: &str = ".corrupt_backup";

/// The default config file path for this user.
pub fn config_file_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("envaudit").join(CONFIG_FILE_NAME))
        .ok_or_else(|| AuditError::ConfigDirUnavailable {
            message: "no user config directory".to_string(),
        })
}

/// Load the configuration from the default location.
pub fn load_config() -> Result<AuditConfig> {
    load_config_from(&config_file_path()?)
}

/// Load the configuration from an explicit path.
///
/// Creates the file (and parent directories) with defaults when missing.
/// An unparseable file is renamed to a `.corrupt_backup` sibling and
/// replaced with defaults.
pub fn load_config_from(path: &Path) -> Result<AuditConfig> {
    if !path.exists() {
        let config = AuditConfig::default();
        save_config_to(&config, path)?;
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<AuditConfig>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!(
                "config at {} is corrupt ({}); backing up and using defaults",
                path.display(),
                e
            );
            back_up_corrupt(path)?;
            let config = AuditConfig::default();
            save_config_to(&config, path)?;
            Ok(config)
        }
    }
}

/// Save the configuration to the default location.
pub fn save_config(config: &AuditConfig) -> Result<()> {
    save_config_to(config, &config_file_path()?)
}

/// Save the configuration as pretty JSON to an explicit path.
pub fn save_config_to(config: &AuditConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content =
        serde_json::to_string_pretty(config).map_err(|e| AuditError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    fs::write(path, content)?;
    Ok(())
}

fn back_up_corrupt(path: &Path) -> Result<()> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(CORRUPT_BACKUP_SUFFIX);
    fs::rename(path, PathBuf::from(backup))?;
    Ok(())
}
