//! CSV Export functionality

use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::models::Contact;

/// Column headers of the CSV export
pub const CSV_HEADER: [&str; 5] = ["Name", "Phones", "Email", "Address", "Birthday"];

/// Separator placed between multiple phone numbers in one cell
pub const PHONE_SEPARATOR: &str = "; ";

/// Export contacts to CSV, one row per contact in store order
pub fn export_contacts_csv<W: Write>(contacts: &[Contact], writer: W) -> ContactResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    out.write_record(CSV_HEADER)
        .map_err(|e| ContactError::Export(e.to_string()))?;

    for contact in contacts {
        let phones = contact.phones.join(PHONE_SEPARATOR);
        out.write_record([
            contact.name.as_str(),
            phones.as_str(),
            contact.email.as_deref().unwrap_or(""),
            contact.address.as_deref().unwrap_or(""),
            contact.birthday.as_deref().unwrap_or(""),
        ])
        .map_err(|e| ContactError::Export(e.to_string()))?;
    }

    out.flush().map_err(|e| ContactError::Export(e.to_string()))?;
    Ok(())
}
