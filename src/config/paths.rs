//! Path management for the contact book
//!
//! Provides XDG-compliant path resolution for the backing file, settings,
//! audit log and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `CONTACTS_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/contacts-cli` or `~/.config/contacts-cli`
//! 3. Windows: `%APPDATA%\contacts-cli`

use std::path::PathBuf;

use crate::error::ContactError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CONTACTS_CLI_DATA_DIR";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Base directory for all contact book data
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Create a new ContactPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ContactError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/contacts-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the default backup directory (~/.config/contacts-cli/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to contacts.json, the backing file
    pub fn contacts_file(&self) -> PathBuf {
        self.base_dir.join("contacts.json")
    }

    /// Ensure the base directory exists
    ///
    /// The backup directory is created by the backup manager, since it may
    /// be relocated through settings.
    pub fn ensure_directories(&self) -> Result<(), ContactError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContactError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| ContactError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("contacts-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ContactError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ContactError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("contacts-cli"))
}
