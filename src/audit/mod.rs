//! Audit logging for the contact book
//!
//! Records every add, update, delete and restore in an append-only
//! line-delimited JSON log, with before/after snapshots of the contact.
//!
//! - `AuditEntry`: one operation with timestamp, subject and snapshots
//! - `AuditLogger`: appends entries to and reads them back from the log
//! - `describe_changes`: field-level summary of an update

mod diff;
mod entry;
mod logger;

pub use diff::describe_changes;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
