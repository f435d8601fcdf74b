//! Contact display formatting
//!
//! Formats contacts for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::contact::title_case;
use crate::models::Contact;

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Phones")]
    phones: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Birthday")]
    birthday: String,
}

impl ContactRow {
    fn from_contact(contact: &Contact) -> Self {
        Self {
            name: title_case(&contact.name),
            phones: contact.phones.join(", "),
            email: contact.email.clone().unwrap_or_else(|| "-".into()),
            birthday: contact.birthday.clone().unwrap_or_else(|| "-".into()),
        }
    }
}

/// Format contacts as a table, in the order given
pub fn format_contact_list(contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.".to_string();
    }

    let rows: Vec<ContactRow> = contacts.iter().map(|c| ContactRow::from_contact(c)).collect();
    let mut output = Table::new(rows).with(Style::psql()).to_string();
    output.push_str(&format!("\n\nTotal: {} contact(s)", contacts.len()));
    output
}

/// Format every field of each contact, one block per contact
pub fn format_contact_details(contacts: &[&Contact]) -> String {
    contacts.iter().map(|c| c.to_string()).collect()
}
