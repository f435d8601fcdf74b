//! Display formatting for terminal output

pub mod backup;
pub mod contact;

pub use backup::format_backup_list;
pub use contact::{format_contact_details, format_contact_list};
