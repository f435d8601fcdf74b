//! Field validators
//!
//! Pure predicates over raw input strings. Invalid input yields `false`;
//! the `check_*` wrappers turn a failed predicate into a validation error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ContactError, ContactResult};

/// Letters, spaces and hyphens, 2 to 50 characters
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z \-]{2,50}$").expect("name pattern is valid"));

/// local@domain.tld with dot-separated domain labels
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)+$")
        .expect("email pattern is valid")
});

/// Digits, spaces and hyphens with an optional single leading `+`
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 \-]+$").expect("phone pattern is valid"));

/// Minimum number of digits a phone number must carry
pub const MIN_PHONE_DIGITS: usize = 3;

/// Check a contact name
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Check an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a phone number
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
        && phone.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
}

pub fn check_name(name: &str) -> ContactResult<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ContactError::Validation(format!(
            "Invalid name '{}': use 2-50 letters, spaces or hyphens",
            name
        )))
    }
}

pub fn check_email(email: &str) -> ContactResult<()> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ContactError::Validation(format!(
            "Invalid email '{}': expected local@domain.tld",
            email
        )))
    }
}

pub fn check_phones(phones: &[String]) -> ContactResult<()> {
    if phones.is_empty() {
        return Err(ContactError::Validation(
            "At least one phone number is required".into(),
        ));
    }

    match phones.iter().find(|p| !is_valid_phone(p)) {
        Some(bad) => Err(ContactError::Validation(format!(
            "Invalid phone '{}': use digits, spaces or hyphens with an optional leading +",
            bad
        ))),
        None => Ok(()),
    }
}
