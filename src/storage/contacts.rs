//! Contact store backed by contacts.json
//!
//! Holds the authoritative in-memory collection and rewrites the whole
//! backing file after every successful mutation.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{error, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::backup::{backup_filename, BackupManager, RestoreManager, RestoreResult};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactChanges};

use super::file_io::{read_json_required, write_json_atomic};

/// What `load` found on disk
#[derive(Debug)]
pub enum LoadOutcome {
    /// The file was read; holds the number of contacts
    Loaded(usize),
    /// No backing file yet; the store starts empty
    Missing,
    /// The file could not be read or parsed; the store starts empty
    Failed(ContactError),
}

/// Whether a save was followed by a backup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// Backup written to this path
    Created(PathBuf),
    /// Backups were not requested for this save
    Skipped,
    /// The save succeeded but the backup did not
    Failed(String),
}

/// Result of a mutation, together with the backup its save produced
#[derive(Debug)]
pub struct Saved<T> {
    pub value: T,
    pub backup: BackupStatus,
}

/// The contact collection and its persistence
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
    backups: BackupManager,
    audit: Option<AuditLogger>,
    backup_on_save: bool,
    unsaved_changes: bool,
    unreadable_on_disk: bool,
}

impl ContactStore {
    /// Create an empty, not yet loaded store for `path`
    pub fn new(path: PathBuf, backups: BackupManager) -> Self {
        Self {
            path,
            contacts: Vec::new(),
            backups,
            audit: None,
            backup_on_save: true,
            unsaved_changes: false,
            unreadable_on_disk: false,
        }
    }

    /// Create a store and load it from disk
    pub fn open(path: PathBuf, backups: BackupManager) -> (Self, LoadOutcome) {
        let mut store = Self::new(path, backups);
        let outcome = store.load();
        (store, outcome)
    }

    /// Record mutations in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Whether mutations back up the file after saving (default true)
    pub fn with_backup_on_save(mut self, enabled: bool) -> Self {
        self.backup_on_save = enabled;
        self
    }

    /// Replace the in-memory collection with the contents of the backing file
    ///
    /// Never fails: a missing or unreadable file leaves the store empty and
    /// the problem is described in the returned outcome.
    pub fn load(&mut self) -> LoadOutcome {
        self.unsaved_changes = false;
        self.unreadable_on_disk = false;

        if !self.path.exists() {
            self.contacts.clear();
            warn!(path = %self.path.display(), "contact file not found, starting empty");
            return LoadOutcome::Missing;
        }

        match read_json_required::<Vec<Contact>, _>(&self.path) {
            Ok(contacts) => {
                self.contacts = contacts;
                LoadOutcome::Loaded(self.contacts.len())
            }
            Err(e) => {
                self.contacts.clear();
                self.unreadable_on_disk = true;
                error!(path = %self.path.display(), error = %e, "failed to load contacts");
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Write the whole collection to the backing file
    ///
    /// When `create_backup` is set, the freshly written file is then copied
    /// into the backup directory. A failed backup does not fail the save.
    ///
    /// If the last load could not parse the file, it is copied aside first
    /// and the save fails when that copy can't be made.
    pub fn save(&mut self, create_backup: bool) -> ContactResult<BackupStatus> {
        if self.unreadable_on_disk {
            self.backups.preserve_unreadable(&self.path)?;
            self.unreadable_on_disk = false;
        }

        write_json_atomic(&self.path, &self.contacts)?;
        self.unsaved_changes = false;

        if !create_backup {
            return Ok(BackupStatus::Skipped);
        }

        match self.backups.create_backup(&self.path) {
            Ok(path) => Ok(BackupStatus::Created(path)),
            Err(e) => {
                warn!(error = %e, "backup after save failed");
                Ok(BackupStatus::Failed(e.to_string()))
            }
        }
    }

    /// Add a contact
    ///
    /// Rejected if another contact has the same name (case-insensitive) or
    /// the same non-empty email.
    pub fn add(&mut self, contact: Contact) -> ContactResult<Saved<Contact>> {
        contact.validate()?;
        self.check_unique(&contact.name, contact.email.as_deref(), None)?;

        self.contacts.push(contact.clone());
        let backup = self.persist()?;

        self.record(AuditEntry::create(&contact));
        Ok(Saved {
            value: contact,
            backup,
        })
    }

    /// Contacts whose name contains `term`, case-insensitive, in store order
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.name_contains(term))
            .collect()
    }

    /// Apply `changes` to the first contact named exactly `original_name`
    ///
    /// Fields not present in `changes` are left untouched. A new name or
    /// email must not collide with any other contact.
    pub fn update(
        &mut self,
        original_name: &str,
        changes: &ContactChanges,
    ) -> ContactResult<Saved<Contact>> {
        let index = self
            .resolve(original_name)
            .ok_or_else(|| ContactError::contact_not_found(original_name))?;

        changes.validate()?;
        self.check_unique(
            changes.name.as_deref().unwrap_or(""),
            changes.email.as_deref(),
            Some(index),
        )?;

        let before = self.contacts[index].clone();
        changes.apply(&mut self.contacts[index]);
        let after = self.contacts[index].clone();

        let backup = self.persist()?;

        self.record(AuditEntry::update(&before, &after));
        Ok(Saved {
            value: after,
            backup,
        })
    }

    /// Remove every contact named exactly `name`
    ///
    /// Returns the number of contacts removed. Nothing is written when no
    /// contact matches.
    pub fn delete(&mut self, name: &str) -> ContactResult<Saved<usize>> {
        let (removed, kept): (Vec<Contact>, Vec<Contact>) = std::mem::take(&mut self.contacts)
            .into_iter()
            .partition(|c| c.name == name);
        self.contacts = kept;

        if removed.is_empty() {
            return Err(ContactError::contact_not_found(name));
        }

        let backup = self.persist()?;

        for contact in &removed {
            self.record(AuditEntry::delete(contact));
        }
        Ok(Saved {
            value: removed.len(),
            backup,
        })
    }

    /// Replace the backing file with the named backup and reload
    ///
    /// The current file is snapshotted first so the restore can be undone.
    /// The returned backup status describes that snapshot.
    pub fn restore_backup(&mut self, filename: &str) -> ContactResult<Saved<RestoreResult>> {
        let source = self
            .backups
            .resolve_backup_path(filename)
            .ok_or_else(|| ContactError::backup_not_found(filename))?;

        let restore = RestoreManager::new(self.path.clone());
        let checked = restore.check_backup(&source)?;

        let backup = self.snapshot_before_restore(&source);
        let result = restore.restore(checked)?;

        if let LoadOutcome::Failed(e) = self.load() {
            return Err(e);
        }

        self.record(AuditEntry::restore(filename, result.contacts_restored));
        Ok(Saved {
            value: result,
            backup,
        })
    }

    /// Back up the current file unless that would overwrite `source`
    fn snapshot_before_restore(&self, source: &Path) -> BackupStatus {
        if !self.path.exists() {
            return BackupStatus::Skipped;
        }

        // A same-minute snapshot would land on the backup being restored
        let snapshot_name = backup_filename(Local::now().naive_local());
        if source
            .file_name()
            .is_some_and(|name| name == snapshot_name.as_str())
        {
            return BackupStatus::Skipped;
        }

        match self.backups.create_backup(&self.path) {
            Ok(path) => BackupStatus::Created(path),
            Err(e) => {
                warn!(error = %e, "pre-restore backup failed");
                BackupStatus::Failed(e.to_string())
            }
        }
    }

    /// Index of the contact a name refers to
    ///
    /// Names are the only identity contacts have: the first exact match wins.
    fn resolve(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name == name)
    }

    /// Reject `name`/`email` if a contact other than `skip` already uses them
    ///
    /// An empty name or email is never a conflict.
    fn check_unique(&self, name: &str, email: Option<&str>, skip: Option<usize>) -> ContactResult<()> {
        let others = self
            .contacts
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .map(|(_, c)| c);

        for other in others {
            if !name.is_empty() && other.matches_name(name) {
                return Err(ContactError::duplicate_name(name));
            }
            if let Some(email) = email {
                if other.has_email(email) {
                    return Err(ContactError::duplicate_email(email));
                }
            }
        }
        Ok(())
    }

    /// Save after an in-memory mutation
    fn persist(&mut self) -> ContactResult<BackupStatus> {
        self.unsaved_changes = true;
        let backup_on_save = self.backup_on_save;
        self.save(backup_on_save)
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }

    /// All contacts in insertion order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The first contact named exactly `name`
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.resolve(name).map(|i| &self.contacts[i])
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// True while an in-memory change has not reached the backing file
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backups(&self) -> &BackupManager {
        &self.backups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ContactStore) {
        let temp_dir = TempDir::new().unwrap();
        let backups = BackupManager::new(temp_dir.path().join("backups"));
        let (store, _) = ContactStore::open(temp_dir.path().join("contacts.json"), backups);
        (temp_dir, store.with_backup_on_save(false))
    }

    fn contact(name: &str) -> Contact {
        Contact::new(name, vec!["912345678".into()])
    }

    fn reload(temp: &TempDir) -> ContactStore {
        let backups = BackupManager::new(temp.path().join("backups"));
        let (store, outcome) = ContactStore::open(temp.path().join("contacts.json"), backups);
        assert!(matches!(outcome, LoadOutcome::Loaded(_)));
        store
    }

    #[test]
    fn test_load_missing_file() {
        let (_temp, store) = create_test_store();
        assert!(store.is_empty());
        assert!(!store.has_unsaved_changes());
    }

    #[test]
    fn test_load_missing_file_outcome() {
        let temp = TempDir::new().unwrap();
        let (store, outcome) = ContactStore::open(
            temp.path().join("contacts.json"),
            BackupManager::new(temp.path().join("backups")),
        );
        assert!(matches!(outcome, LoadOutcome::Missing));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("contacts.json"), "{ this is not json").unwrap();

        let (store, outcome) = ContactStore::open(
            temp.path().join("contacts.json"),
            BackupManager::new(temp.path().join("backups")),
        );

        assert!(matches!(outcome, LoadOutcome::Failed(ContactError::Storage(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_after_failed_load_keeps_unreadable_copy() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("contacts.json"), "{ this is not json").unwrap();
        let (store, _) = ContactStore::open(
            temp.path().join("contacts.json"),
            BackupManager::new(temp.path().join("backups")),
        );
        let mut store = store.with_backup_on_save(false);

        store.add(contact("Ana Silva")).unwrap();
        store.add(contact("Bruno")).unwrap();

        let copies: Vec<_> = fs::read_dir(temp.path().join("backups"))
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(copies.len(), 1);
        assert_eq!(fs::read(&copies[0]).unwrap(), b"{ this is not json");
        assert_eq!(reload(&temp).len(), 2);
    }

    #[test]
    fn test_load_wrong_shape() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("contacts.json"),
            r#"[{"name": "Ana", "phones": ["912345678"], "nickname": "A"}]"#,
        )
        .unwrap();

        let (store, outcome) = ContactStore::open(
            temp.path().join("contacts.json"),
            BackupManager::new(temp.path().join("backups")),
        );

        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_and_reload() {
        let (temp, mut store) = create_test_store();

        let saved = store
            .add(contact("Ana Silva").with_email("ana@example.com"))
            .unwrap();
        store.add(contact("Bruno")).unwrap();

        assert_eq!(saved.value.name, "Ana Silva");
        assert_eq!(saved.backup, BackupStatus::Skipped);
        assert!(!store.has_unsaved_changes());

        let reloaded = reload(&temp);
        let names: Vec<_> = reloaded.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Silva", "Bruno"]);
        assert_eq!(reloaded.contacts()[0].email.as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn test_saved_file_format() {
        let (temp, mut store) = create_test_store();
        store.add(contact("Bruno")).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join("contacts.json")).unwrap())
                .unwrap();
        assert_eq!(
            raw,
            serde_json::json!([{
                "name": "Bruno",
                "phones": ["912345678"],
                "email": null,
                "address": null,
                "birthday": null
            }])
        );
    }

    #[test]
    fn test_add_duplicate_name_rejected() {
        let (_temp, mut store) = create_test_store();
        store.add(contact("Ana Silva")).unwrap();

        let err = store.add(contact("Ana Silva")).unwrap_err();
        assert!(err.is_conflict());
        let err = store.add(contact("ana silva")).unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_duplicate_email_rejected() {
        let (_temp, mut store) = create_test_store();
        store
            .add(contact("Ana Silva").with_email("shared@example.com"))
            .unwrap();

        let err = store
            .add(contact("Bruno").with_email("shared@example.com"))
            .unwrap_err();
        assert!(matches!(
            err,
            ContactError::Duplicate {
                entity_type: "Email",
                ..
            }
        ));
        assert_eq!(store.len(), 1);

        // Contacts without email never conflict with each other
        store.add(contact("Carla")).unwrap();
        store.add(contact("Duarte")).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_invalid_contact_rejected() {
        let (temp, mut store) = create_test_store();

        let err = store.add(Contact::new("Ana", vec![])).unwrap_err();
        assert!(err.is_validation());
        let err = store.add(contact("A")).unwrap_err();
        assert!(err.is_validation());

        assert!(store.is_empty());
        assert!(!temp.path().join("contacts.json").exists());
    }

    #[test]
    fn test_uniqueness_over_many_adds() {
        let (_temp, mut store) = create_test_store();
        let attempts = [
            ("Ana Silva", Some("a@x.com")),
            ("Bruno", Some("b@x.com")),
            ("Ana Silva", None),
            ("Carla", Some("a@x.com")),
            ("Duarte", None),
            ("BRUNO", Some("d@x.com")),
            ("Eva", Some("e@x.com")),
        ];
        for (name, email) in attempts {
            let mut c = contact(name);
            c.email = email.map(String::from);
            let _ = store.add(c);
        }

        let contacts = store.contacts();
        for (i, a) in contacts.iter().enumerate() {
            for b in &contacts[i + 1..] {
                assert!(!a.matches_name(&b.name));
                if let Some(email) = a.email.as_deref() {
                    assert!(!b.has_email(email));
                }
            }
        }
        assert_eq!(contacts.len(), 4);
    }

    #[test]
    fn test_search_case_insensitive() {
        let (_temp, mut store) = create_test_store();
        store.add(contact("Ana Silva")).unwrap();
        store.add(contact("Bruno")).unwrap();
        store.add(contact("Mariana Costa")).unwrap();

        let names: Vec<_> = store.search("ana").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Silva", "Mariana Costa"]);

        assert_eq!(store.search("BRU").len(), 1);
        assert!(store.search("zed").is_empty());
    }

    #[test]
    fn test_update_only_changes_given_field() {
        let (temp, mut store) = create_test_store();
        store
            .add(
                contact("Ana Silva")
                    .with_email("ana@example.com")
                    .with_address("Lisboa")
                    .with_birthday("1 May"),
            )
            .unwrap();
        store.add(contact("Bruno").with_email("b@x.org")).unwrap();
        let before = store.contacts().to_vec();

        let saved = store
            .update("Ana Silva", &ContactChanges::default().email("x@y.com"))
            .unwrap();

        let mut expected = before[0].clone();
        expected.email = Some("x@y.com".into());
        assert_eq!(saved.value, expected);
        assert_eq!(store.contacts()[0], expected);
        assert_eq!(store.contacts()[1], before[1]);

        assert_eq!(reload(&temp).contacts()[0], expected);
    }

    #[test]
    fn test_update_not_found() {
        let (_temp, mut store) = create_test_store();
        store.add(contact("Ana Silva")).unwrap();

        let err = store
            .update("ana silva", &ContactChanges::default().email("x@y.com"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.contacts()[0].email.is_none());
    }

    #[test]
    fn test_update_rename_collision_rejected() {
        let (_temp, mut store) = create_test_store();
        store.add(contact("Ana Silva").with_email("a@x.com")).unwrap();
        store.add(contact("Bruno").with_email("b@x.com")).unwrap();

        let err = store
            .update("Bruno", &ContactChanges::default().name("Ana Silva"))
            .unwrap_err();
        assert!(err.is_conflict());

        let err = store
            .update("Bruno", &ContactChanges::default().email("A@X.COM"))
            .unwrap_err();
        assert!(err.is_conflict());

        assert_eq!(store.contacts()[1].name, "Bruno");
        assert_eq!(store.contacts()[1].email.as_deref(), Some("b@x.com"));
    }

    #[test]
    fn test_update_own_name_and_email_allowed() {
        let (_temp, mut store) = create_test_store();
        store.add(contact("Ana Silva").with_email("a@x.com")).unwrap();

        let saved = store
            .update(
                "Ana Silva",
                &ContactChanges::default().name("ANA SILVA").email("a@x.com"),
            )
            .unwrap();
        assert_eq!(saved.value.name, "ANA SILVA");
    }

    #[test]
    fn test_update_invalid_field_rejected() {
        let (_temp, mut store) = create_test_store();
        store.add(contact("Ana Silva")).unwrap();

        let err = store
            .update("Ana Silva", &ContactChanges::default().phones(vec!["abc".into()]))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.contacts()[0].phones, vec!["912345678".to_string()]);
    }

    #[test]
    fn test_delete() {
        let (temp, mut store) = create_test_store();
        store.add(contact("Ana Silva")).unwrap();
        store.add(contact("Bruno")).unwrap();

        let saved = store.delete("Ana Silva").unwrap();

        assert_eq!(saved.value, 1);
        assert_eq!(store.len(), 1);
        assert_eq!(reload(&temp).len(), 1);
    }

    #[test]
    fn test_delete_removes_all_exact_matches() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("contacts.json"),
            r#"[
                {"name": "Ana", "phones": ["111"]},
                {"name": "Bruno", "phones": ["222"]},
                {"name": "Ana", "phones": ["333"]},
                {"name": "ana", "phones": ["444"]}
            ]"#,
        )
        .unwrap();
        let mut store = reload(&temp).with_backup_on_save(false);

        assert_eq!(store.delete("Ana").unwrap().value, 2);
        let names: Vec<_> = store.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bruno", "ana"]);
    }

    #[test]
    fn test_delete_miss_leaves_store_and_file() {
        let (temp, mut store) = create_test_store();
        store.add(contact("Ana Silva")).unwrap();
        let path = temp.path().join("contacts.json");
        let on_disk = fs::read(&path).unwrap();

        let err = store.delete("Nobody").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.len(), 1);
        assert_eq!(fs::read(&path).unwrap(), on_disk);
    }

    #[test]
    fn test_update_first_match_only() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("contacts.json"),
            r#"[
                {"name": "Ana", "phones": ["111"]},
                {"name": "Ana", "phones": ["333"]}
            ]"#,
        )
        .unwrap();
        let mut store = reload(&temp).with_backup_on_save(false);

        store
            .update("Ana", &ContactChanges::default().birthday("1 May"))
            .unwrap();

        assert_eq!(store.contacts()[0].birthday.as_deref(), Some("1 May"));
        assert!(store.contacts()[1].birthday.is_none());
    }

    #[test]
    fn test_save_creates_backup() {
        let temp = TempDir::new().unwrap();
        let backups = BackupManager::new(temp.path().join("backups"));
        let (mut store, _) = ContactStore::open(temp.path().join("contacts.json"), backups);

        let saved = store.add(contact("Ana Silva")).unwrap();

        let BackupStatus::Created(backup_path) = &saved.backup else {
            panic!("expected a backup, got {:?}", saved.backup);
        };
        assert_eq!(
            fs::read(backup_path).unwrap(),
            fs::read(temp.path().join("contacts.json")).unwrap()
        );
        assert_eq!(store.backups().list_recent_backups(3).len(), 1);
    }

    #[test]
    fn test_save_failure_keeps_unsaved_flag() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing-dir").join("contacts.json");
        let mut store = ContactStore::new(path, BackupManager::new(temp.path().join("backups")))
            .with_backup_on_save(false);

        let err = store.add(contact("Ana Silva")).unwrap_err();

        assert!(err.is_persistence());
        assert_eq!(store.len(), 1);
        assert!(store.has_unsaved_changes());
    }

    #[test]
    fn test_audit_records_mutations() {
        let (temp, store) = create_test_store();
        let logger = AuditLogger::new(temp.path().join("audit.log"));
        let mut store = store.with_audit(logger.clone());

        store.add(contact("Ana Silva")).unwrap();
        store
            .update("Ana Silva", &ContactChanges::default().address("Porto"))
            .unwrap();
        store.delete("Ana Silva").unwrap();
        let _ = store.delete("Ana Silva");

        let ops: Vec<_> = logger
            .read_all()
            .unwrap()
            .into_iter()
            .map(|e| e.operation.to_string())
            .collect();
        assert_eq!(ops, vec!["CREATE", "UPDATE", "DELETE"]);
    }

    #[test]
    fn test_restore_backup() {
        let temp = TempDir::new().unwrap();
        let backups = BackupManager::new(temp.path().join("backups"));
        let (store, _) = ContactStore::open(temp.path().join("contacts.json"), backups);
        let mut store = store.with_backup_on_save(false);

        store.add(contact("Ana Silva")).unwrap();
        let old = store
            .backups()
            .create_backup_at(
                store.path(),
                chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap(),
            )
            .unwrap();
        store.add(contact("Bruno")).unwrap();

        let filename = old.file_name().unwrap().to_str().unwrap().to_string();
        let saved = store.restore_backup(&filename).unwrap();

        assert_eq!(saved.value.contacts_restored, 1);
        assert!(matches!(saved.backup, BackupStatus::Created(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.contacts()[0].name, "Ana Silva");
        assert_eq!(
            fs::read(store.path()).unwrap(),
            fs::read(&old).unwrap()
        );
    }

    #[test]
    fn test_restore_unknown_backup() {
        let (_temp, mut store) = create_test_store();
        store.add(contact("Ana Silva")).unwrap();

        let err = store
            .restore_backup("contacts_backup_2024_01_01_10_00.json")
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.len(), 1);
    }
}
