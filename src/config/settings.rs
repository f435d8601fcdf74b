//! User settings for the contact book
//!
//! Manages preferences for automatic backups and the audit journal.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ContactPaths;
use crate::backup::DEFAULT_RECENT_BACKUPS;
use crate::error::ContactError;

/// User settings for the contact book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Snapshot the backing file after every successful save
    #[serde(default = "default_true")]
    pub backup_on_save: bool,

    /// How many backups `backup list` shows by default
    #[serde(default = "default_recent_backup_count")]
    pub recent_backup_count: usize,

    /// Backup directory override; defaults to `<base>/backups`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_dir: Option<PathBuf>,

    /// Append create/update/delete records to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_recent_backup_count() -> usize {
    DEFAULT_RECENT_BACKUPS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backup_on_save: true,
            recent_backup_count: default_recent_backup_count(),
            backup_dir: None,
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ContactError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContactError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContactPaths) -> Result<(), ContactError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ContactError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ContactError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The backup directory these settings resolve to
    pub fn backup_dir(&self, paths: &ContactPaths) -> PathBuf {
        self.backup_dir
            .clone()
            .unwrap_or_else(|| paths.backup_dir())
    }
}
