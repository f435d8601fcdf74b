//! Export module for the contact book
//!
//! - CSV: one row per contact (spreadsheet-compatible)
//! - YAML: the full collection with export metadata (human-readable)

pub mod csv;
pub mod yaml;

pub use self::csv::export_contacts_csv;
pub use self::yaml::{export_contacts_yaml, ContactExport};
