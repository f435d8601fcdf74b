//! Backup restoration for the contact book
//!
//! Replaces the backing file with the contents of a backup.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::storage::file_io::write_bytes_atomic;

use super::manager::parse_backup_timestamp;

/// Handles restoring from backups
pub struct RestoreManager {
    contacts_file: PathBuf,
}

impl RestoreManager {
    /// Create a RestoreManager that restores into `contacts_file`
    pub fn new(contacts_file: PathBuf) -> Self {
        Self { contacts_file }
    }

    /// Read a backup and check that it is a valid contact file
    ///
    /// Nothing is written; the returned value is what [`Self::restore`]
    /// writes back.
    pub fn check_backup(&self, backup_path: &Path) -> ContactResult<CheckedBackup> {
        let bytes = read_backup(backup_path)?;
        let contacts = parse_contacts(&bytes)?;

        Ok(CheckedBackup {
            source: backup_path.to_path_buf(),
            contact_count: contacts.len(),
            bytes,
        })
    }

    /// Replace the backing file with a checked backup
    ///
    /// The restored file is byte-identical to the backup.
    pub fn restore(&self, backup: CheckedBackup) -> ContactResult<RestoreResult> {
        write_bytes_atomic(&self.contacts_file, &backup.bytes)?;

        Ok(RestoreResult {
            source: backup.source,
            contacts_restored: backup.contact_count,
        })
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> ContactResult<ValidationResult> {
        let backup = self.check_backup(backup_path)?;

        Ok(ValidationResult {
            contact_count: backup.contact_count,
            size_bytes: backup.bytes.len() as u64,
            backup_date: backup_path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(parse_backup_timestamp),
        })
    }
}

fn read_backup(backup_path: &Path) -> ContactResult<Vec<u8>> {
    if !backup_path.is_file() {
        return Err(ContactError::backup_not_found(backup_path.display().to_string()));
    }
    fs::read(backup_path)
        .map_err(|e| ContactError::Backup(format!("Failed to read backup file: {}", e)))
}

fn parse_contacts(bytes: &[u8]) -> ContactResult<Vec<Contact>> {
    serde_json::from_slice(bytes)
        .map_err(|e| ContactError::Backup(format!("Backup is not a valid contact file: {}", e)))
}

/// A backup that parsed as a contact list, held in memory until restored
#[derive(Debug)]
pub struct CheckedBackup {
    source: PathBuf,
    contact_count: usize,
    bytes: Vec<u8>,
}

impl CheckedBackup {
    /// Number of contacts in the backup
    pub fn contact_count(&self) -> usize {
        self.contact_count
    }
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    /// Backup the data came from
    pub source: PathBuf,
    /// Number of contacts in the restored file
    pub contacts_restored: usize,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source.display().to_string());
        format!("Restored {} contact(s) from {}", self.contacts_restored, name)
    }
}

/// Result of validating a backup
#[derive(Debug)]
pub struct ValidationResult {
    /// Number of contacts in the backup
    pub contact_count: usize,
    /// Size of the backup in bytes
    pub size_bytes: u64,
    /// Timestamp from the filename, when it follows the naming convention
    pub backup_date: Option<NaiveDateTime>,
}
