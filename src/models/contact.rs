//! Contact model
//!
//! A single person's record. The name is the only identity the contact
//! book knows about; there is no surrogate id.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation;
use crate::error::ContactResult;

/// A contact record as stored in the backing file
///
/// Serializes to an object with exactly the keys `name`, `phones`, `email`,
/// `address` and `birthday`. Absent optional fields are written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Display name, also the lookup key
    pub name: String,

    /// Phone numbers, in the order they were entered
    pub phones: Vec<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    /// Free text, no date format is enforced
    #[serde(default)]
    pub birthday: Option<String>,
}

impl Contact {
    /// Create a contact with no optional fields set
    ///
    /// The entity does not validate itself; see [`Contact::validate`].
    pub fn new(name: impl Into<String>, phones: Vec<String>) -> Self {
        Self {
            name: name.into(),
            phones,
            email: None,
            address: None,
            birthday: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }

    /// Validate name, phones and (if present) email
    pub fn validate(&self) -> ContactResult<()> {
        validation::check_name(&self.name)?;
        validation::check_phones(&self.phones)?;
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validation::check_email(email)?;
        }
        Ok(())
    }

    /// Convert to a plain key-value structure
    pub fn to_value(&self) -> ContactResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a contact from a key-value structure
    pub fn from_value(value: serde_json::Value) -> ContactResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Normalize a name for case-insensitive comparison
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this contact's name matches (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Check if this contact's name contains `term` (case-insensitive)
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Check if this contact has the given non-empty email (case-insensitive)
    pub fn has_email(&self, email: &str) -> bool {
        !email.is_empty()
            && self
                .email
                .as_deref()
                .is_some_and(|own| own.eq_ignore_ascii_case(email))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(40);
        writeln!(f, "{}", rule)?;
        writeln!(f, "Name:      {}", title_case(&self.name))?;
        writeln!(f, "Phones:    {}", self.phones.join(", "))?;
        writeln!(f, "Email:     {}", or_placeholder(&self.email))?;
        writeln!(f, "Address:   {}", or_placeholder(&self.address))?;
        writeln!(f, "Birthday:  {}", or_placeholder(&self.birthday))?;
        writeln!(f, "{}", rule)
    }
}

fn or_placeholder(field: &Option<String>) -> &str {
    match field.as_deref() {
        Some(value) if !value.is_empty() => value,
        _ => "-",
    }
}

/// Capitalize the first letter of every word, lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// A partial update: only the fields that are `Some` are applied
///
/// For the optional fields an empty string clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    pub name: Option<String>,
    pub phones: Option<Vec<String>>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub birthday: Option<String>,
}

impl ContactChanges {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phones(mut self, phones: Vec<String>) -> Self {
        self.phones = Some(phones);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn birthday(mut self, birthday: impl Into<String>) -> Self {
        self.birthday = Some(birthday.into());
        self
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phones.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.birthday.is_none()
    }

    /// Validate only the fields being changed
    pub fn validate(&self) -> ContactResult<()> {
        if let Some(name) = &self.name {
            validation::check_name(name)?;
        }
        if let Some(phones) = &self.phones {
            validation::check_phones(phones)?;
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            validation::check_email(email)?;
        }
        Ok(())
    }

    /// Apply the supplied fields to `contact`, leaving the rest untouched
    pub fn apply(&self, contact: &mut Contact) {
        if let Some(name) = &self.name {
            contact.name = name.clone();
        }
        if let Some(phones) = &self.phones {
            contact.phones = phones.clone();
        }
        if let Some(email) = &self.email {
            contact.email = non_empty(email);
        }
        if let Some(address) = &self.address {
            contact.address = non_empty(address);
        }
        if let Some(birthday) = &self.birthday {
            contact.birthday = non_empty(birthday);
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
