//! YAML Export functionality
//!
//! Exports the complete contact collection in a human-readable form.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, ContactResult};
use crate::models::Contact;

/// Full export document
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactExport {
    /// When the export was produced
    pub exported_at: DateTime<Utc>,
    /// Version of the tool that produced it
    pub app_version: String,
    /// Number of contacts exported
    pub contact_count: usize,
    pub contacts: Vec<Contact>,
}

impl ContactExport {
    pub fn new(contacts: &[Contact]) -> Self {
        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_count: contacts.len(),
            contacts: contacts.to_vec(),
        }
    }
}

/// Export contacts to YAML
pub fn export_contacts_yaml<W: Write>(contacts: &[Contact], writer: &mut W) -> ContactResult<()> {
    let export = ContactExport::new(contacts);

    writeln!(writer, "# Contact book export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer))
        .map_err(|e| ContactError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}
