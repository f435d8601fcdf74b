//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the contact store.

pub mod backup;
pub mod contact;
pub mod export;

pub use backup::{handle_backup_command, BackupCommands};
pub use contact::{handle_contact_command, ContactCommands};
pub use export::{handle_export_command, ExportFormat};
