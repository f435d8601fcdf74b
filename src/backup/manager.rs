//! Backup manager for the contact book
//!
//! Copies the backing file into a backup directory under a name that embeds
//! the creation time at minute resolution. Two backups taken within the same
//! minute share a name, so the later one overwrites the earlier.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime};
use tracing::{debug, info, warn};

use crate::error::{ContactError, ContactResult};

/// Filename prefix shared by all backups
pub const BACKUP_PREFIX: &str = "contacts_backup_";

/// Filename extension of backups
pub const BACKUP_EXTENSION: &str = ".json";

/// Filename prefix of copies of a contact file that failed to parse
pub const UNREADABLE_PREFIX: &str = "contacts_unreadable_";

/// Timestamp embedded in backup filenames
pub const TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H_%M";

/// Number of backups listed when settings don't say otherwise
pub const DEFAULT_RECENT_BACKUPS: usize = 3;

/// Metadata about a backup
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Timestamp parsed from the filename
    pub created_at: NaiveDateTime,
    /// File modification time, used for ordering
    pub modified: DateTime<Local>,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Creates, lists and resolves backups of the backing file
#[derive(Debug, Clone)]
pub struct BackupManager {
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Create a new BackupManager rooted at `backup_dir`
    pub fn new(backup_dir: PathBuf) -> Self {
        Self { backup_dir }
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Create the backup directory if it doesn't exist yet
    pub fn ensure_backup_directory(&self) -> ContactResult<()> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            ContactError::Backup(format!(
                "Failed to create backup directory {}: {}",
                self.backup_dir.display(),
                e
            ))
        })
    }

    /// Copy `source` into the backup directory, stamped with the current time
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self, source: &Path) -> ContactResult<PathBuf> {
        self.create_backup_at(source, Local::now().naive_local())
    }

    /// Copy `source` into the backup directory, stamped with `timestamp`
    pub fn create_backup_at(
        &self,
        source: &Path,
        timestamp: NaiveDateTime,
    ) -> ContactResult<PathBuf> {
        if !source.is_file() {
            return Err(ContactError::NotFound {
                entity_type: "Contact file",
                identifier: source.display().to_string(),
            });
        }

        self.ensure_backup_directory()?;

        let backup_path = self.backup_dir.join(backup_filename(timestamp));
        fs::copy(source, &backup_path).map_err(|e| {
            ContactError::Backup(format!(
                "Failed to copy {} to {}: {}",
                source.display(),
                backup_path.display(),
                e
            ))
        })?;

        info!(backup = %backup_path.display(), "backup created");
        Ok(backup_path)
    }

    /// Copy a contact file that failed to parse into the backup directory
    ///
    /// The copy is named `contacts_unreadable_<timestamp>.json`, so it never
    /// collides with a regular backup and is left out of backup listings.
    pub fn preserve_unreadable(&self, source: &Path) -> ContactResult<PathBuf> {
        self.ensure_backup_directory()?;

        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        let copy_path = self
            .backup_dir
            .join(format!("{}{}{}", UNREADABLE_PREFIX, stamp, BACKUP_EXTENSION));
        fs::copy(source, &copy_path).map_err(|e| {
            ContactError::Backup(format!(
                "Failed to preserve unreadable {} as {}: {}",
                source.display(),
                copy_path.display(),
                e
            ))
        })?;

        warn!(copy = %copy_path.display(), "preserved unreadable contact file");
        Ok(copy_path)
    }

    /// List all backups, most recently modified first
    ///
    /// Files that don't follow the backup naming convention are ignored.
    pub fn list_backups(&self) -> ContactResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir).map_err(|e| {
            ContactError::Backup(format!("Failed to read backup directory: {}", e))
        })? {
            let entry = entry.map_err(|e| {
                ContactError::Backup(format!("Failed to read directory entry: {}", e))
            })?;

            if let Some(info) = parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        // Newest first; same mtime falls back to the name, which sorts by time
        backups.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| b.filename.cmp(&a.filename))
        });

        Ok(backups)
    }

    /// Filenames of up to `n` most recent backups, most recent first
    ///
    /// An absent or unreadable backup directory yields an empty list.
    pub fn list_recent_backups(&self, n: usize) -> Vec<String> {
        match self.list_backups() {
            Ok(backups) => backups.into_iter().take(n).map(|b| b.filename).collect(),
            Err(e) => {
                debug!(error = %e, "could not list backups");
                Vec::new()
            }
        }
    }

    /// Full path of the named backup, if it exists in the backup directory
    ///
    /// Only bare filenames are accepted; anything with a directory component
    /// resolves to `None`.
    pub fn resolve_backup_path(&self, filename: &str) -> Option<PathBuf> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return None,
        }

        let path = self.backup_dir.join(filename);
        path.is_file().then_some(path)
    }

    /// Get the most recent backup
    pub fn latest_backup(&self) -> ContactResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

/// Backup filename for a given timestamp
pub fn backup_filename(timestamp: NaiveDateTime) -> String {
    format!(
        "{}{}{}",
        BACKUP_PREFIX,
        timestamp.format(TIMESTAMP_FORMAT),
        BACKUP_EXTENSION
    )
}

/// Parse the timestamp out of a backup filename
pub fn parse_backup_timestamp(filename: &str) -> Option<NaiveDateTime> {
    let stamp = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(BACKUP_EXTENSION)?;

    // chrono accepts unpadded fields, the naming convention doesn't
    if stamp.len() != "YYYY_MM_DD_HH_MM".len() {
        return None;
    }

    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_str()?.to_string();
    let created_at = parse_backup_timestamp(&filename)?;

    let metadata = fs::metadata(path).ok()?;
    if !metadata.is_file() {
        return None;
    }
    let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);

    Some(BackupInfo {
        filename,
        created_at,
        modified: DateTime::<Local>::from(modified),
        size_bytes: metadata.len(),
    })
}
