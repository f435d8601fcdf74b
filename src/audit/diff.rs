//! Change summaries for audit logging
//!
//! Describes which contact fields an update touched, in field order.

use crate::models::Contact;

/// Longest field value shown before truncating
const MAX_VALUE_CHARS: usize = 50;

/// Summarize the field changes between two versions of a contact
///
/// Returns `None` when nothing changed.
pub fn describe_changes(before: &Contact, after: &Contact) -> Option<String> {
    let fields = [
        ("name", Some(before.name.clone()), Some(after.name.clone())),
        (
            "phones",
            Some(before.phones.join(", ")),
            Some(after.phones.join(", ")),
        ),
        ("email", before.email.clone(), after.email.clone()),
        ("address", before.address.clone(), after.address.clone()),
        ("birthday", before.birthday.clone(), after.birthday.clone()),
    ];

    let changes: Vec<String> = fields
        .into_iter()
        .filter(|(_, old, new)| old != new)
        .map(|(field, old, new)| {
            format!("{}: {} -> {}", field, format_field(&old), format_field(&new))
        })
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_field(value: &Option<String>) -> String {
    match value {
        None => "(none)".to_string(),
        Some(s) if s.chars().count() > MAX_VALUE_CHARS => {
            let head: String = s.chars().take(MAX_VALUE_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Some(s) => format!("\"{}\"", s),
    }
}
