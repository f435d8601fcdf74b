//! Audit entry data structures
//!
//! Defines the operation types and the entry format of the audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Contact;

use super::diff::describe_changes;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was added
    Create,
    /// Contact was edited
    Update,
    /// Contact was removed
    Delete,
    /// Backing file was replaced from a backup
    Restore,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Restore => write!(f, "RESTORE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// Name of the affected contact, or the backup filename for restores
    pub subject: String,

    /// The contact before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The contact after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, subject: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            subject: subject.into(),
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for an added contact
    pub fn create(contact: &Contact) -> Self {
        Self {
            after: serde_json::to_value(contact).ok(),
            ..Self::new(Operation::Create, &contact.name)
        }
    }

    /// Entry for an edited contact, keyed by its name before the edit
    pub fn update(before: &Contact, after: &Contact) -> Self {
        Self {
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary: describe_changes(before, after),
            ..Self::new(Operation::Update, &before.name)
        }
    }

    /// Entry for a removed contact
    pub fn delete(contact: &Contact) -> Self {
        Self {
            before: serde_json::to_value(contact).ok(),
            ..Self::new(Operation::Delete, &contact.name)
        }
    }

    /// Entry for a restore from the named backup
    pub fn restore(backup_filename: &str, contact_count: usize) -> Self {
        Self {
            diff_summary: Some(format!("{} contact(s) restored", contact_count)),
            ..Self::new(Operation::Restore, backup_filename)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.subject
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
