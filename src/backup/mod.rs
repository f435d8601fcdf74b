//! Backup system for the contact book
//!
//! Snapshots the backing file into a backup directory and restores it.
//!
//! # Architecture
//!
//! - `BackupManager`: Creates, lists and resolves timestamped backups
//! - `RestoreManager`: Validates and restores backups
//!
//! # Backup Format
//!
//! A backup is a byte-identical copy of `contacts.json`, named
//! `contacts_backup_YYYY_MM_DD_HH_MM.json`. The timestamp has minute
//! resolution, so a second backup within the same minute replaces the first.
//! Backups are never pruned automatically.
//!
//! # Example
//!
//! ```rust,ignore
//! use contacts::backup::{BackupManager, RestoreManager};
//!
//! let manager = BackupManager::new(paths.backup_dir());
//! let backup_path = manager.create_backup(&paths.contacts_file())?;
//!
//! // Later, restore from backup
//! let restore = RestoreManager::new(paths.contacts_file());
//! let checked = restore.check_backup(&backup_path)?;
//! let result = restore.restore(checked)?;
//! println!("{}", result.summary());
//! ```

mod manager;
mod restore;

pub use manager::{
    backup_filename, parse_backup_timestamp, BackupInfo, BackupManager, DEFAULT_RECENT_BACKUPS,
};
pub use restore::{CheckedBackup, RestoreManager, RestoreResult, ValidationResult};
