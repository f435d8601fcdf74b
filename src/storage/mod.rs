//! Storage layer for the contact book
//!
//! Provides the JSON-file-backed contact store, atomic writes, and wiring
//! of the store to its backup directory and audit log.

pub mod contacts;
pub mod file_io;

pub use contacts::{BackupStatus, ContactStore, LoadOutcome, Saved};
pub use file_io::{read_json_required, write_bytes_atomic, write_json_atomic};

use crate::audit::AuditLogger;
use crate::backup::BackupManager;
use crate::config::{ContactPaths, Settings};
use crate::error::ContactError;

/// Open the contact store described by `paths` and `settings`
///
/// Directory creation failures are errors; problems with the backing file
/// itself are reported through the returned [`LoadOutcome`].
pub fn open_store(
    paths: &ContactPaths,
    settings: &Settings,
) -> Result<(ContactStore, LoadOutcome), ContactError> {
    paths.ensure_directories()?;

    let backups = BackupManager::new(settings.backup_dir(paths));
    backups.ensure_backup_directory()?;

    let (store, outcome) = ContactStore::open(paths.contacts_file(), backups);
    let mut store = store.with_backup_on_save(settings.backup_on_save);
    if settings.audit_enabled {
        store = store.with_audit(AuditLogger::new(paths.audit_log()));
    }

    Ok((store, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().join("book"));

        let (store, outcome) = open_store(&paths, &Settings::default()).unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.backup_dir().exists());
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_store_honours_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            backup_on_save: false,
            audit_enabled: false,
            ..Settings::default()
        };

        let (mut store, _) = open_store(&paths, &settings).unwrap();
        let saved = store
            .add(Contact::new("Ana Silva", vec!["912345678".into()]))
            .unwrap();

        assert_eq!(saved.backup, BackupStatus::Skipped);
        assert!(!paths.audit_log().exists());
    }

    #[test]
    fn test_open_store_with_backup_dir_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            backup_dir: Some(temp_dir.path().join("snapshots")),
            ..Settings::default()
        };

        let (mut store, _) = open_store(&paths, &settings).unwrap();
        store
            .add(Contact::new("Ana Silva", vec!["912345678".into()]))
            .unwrap();

        assert_eq!(store.backups().backup_dir(), temp_dir.path().join("snapshots"));
        assert_eq!(store.backups().list_recent_backups(3).len(), 1);
        assert!(paths.audit_log().exists());
    }
}
