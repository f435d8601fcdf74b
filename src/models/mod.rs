//! Core data models for the contact book

pub mod contact;
pub mod validation;

pub use contact::{Contact, ContactChanges};
pub use validation::{is_valid_email, is_valid_name, is_valid_phone};
