//! Contact CLI commands
//!
//! Implements CLI commands for adding, listing, searching, editing and
//! deleting contacts.

use clap::Subcommand;

use crate::display::{format_contact_details, format_contact_list};
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactChanges};
use crate::storage::{BackupStatus, ContactStore};

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Add a new contact
    Add {
        /// Contact name (letters, spaces and hyphens)
        name: String,
        /// Phone number; repeat for more than one
        #[arg(short, long = "phone", required = true)]
        phones: Vec<String>,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Postal address
        #[arg(short, long)]
        address: Option<String>,
        /// Birthday (free text)
        #[arg(short, long)]
        birthday: Option<String>,
    },
    /// List all contacts
    #[command(alias = "ls")]
    List,
    /// Show every field of a contact
    Show {
        /// Exact contact name
        name: String,
    },
    /// Search contacts by part of their name
    Search {
        /// Case-insensitive search term
        term: String,
    },
    /// Edit a contact; only the given fields change
    Update {
        /// Exact current name of the contact
        contact: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// Replace the phone numbers; repeat for more than one
        #[arg(short, long = "phone")]
        phones: Vec<String>,
        /// New email ("" clears it)
        #[arg(short, long)]
        email: Option<String>,
        /// New address ("" clears it)
        #[arg(short, long)]
        address: Option<String>,
        /// New birthday ("" clears it)
        #[arg(short, long)]
        birthday: Option<String>,
    },
    /// Delete every contact with this exact name
    #[command(alias = "rm")]
    Delete {
        /// Exact contact name
        name: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a contact command
pub fn handle_contact_command(store: &mut ContactStore, cmd: ContactCommands) -> ContactResult<()> {
    match cmd {
        ContactCommands::Add {
            name,
            phones,
            email,
            address,
            birthday,
        } => {
            let contact = Contact {
                name,
                phones,
                email: email.filter(|e| !e.is_empty()),
                address: address.filter(|a| !a.is_empty()),
                birthday: birthday.filter(|b| !b.is_empty()),
            };

            let saved = store.add(contact)?;
            println!("Contact '{}' added.", saved.value.name);
            report_backup(&saved.backup);
        }

        ContactCommands::List => {
            let contacts: Vec<&Contact> = store.contacts().iter().collect();
            println!("{}", format_contact_list(&contacts));
        }

        ContactCommands::Show { name } => {
            let contact = store
                .get(&name)
                .ok_or_else(|| ContactError::contact_not_found(&name))?;
            print!("{}", contact);
        }

        ContactCommands::Search { term } => {
            if term.trim().is_empty() {
                return Err(ContactError::Validation(
                    "Search term cannot be empty".into(),
                ));
            }

            let matches = store.search(&term);
            if matches.is_empty() {
                println!("No contacts match '{}'.", term);
            } else {
                print!("{}", format_contact_details(&matches));
                println!("{} match(es)", matches.len());
            }
        }

        ContactCommands::Update {
            contact,
            name,
            phones,
            email,
            address,
            birthday,
        } => {
            let changes = ContactChanges {
                name,
                phones: (!phones.is_empty()).then_some(phones),
                email,
                address,
                birthday,
            };

            if changes.is_empty() {
                return Err(ContactError::Validation(
                    "Nothing to update; pass at least one field".into(),
                ));
            }

            let saved = store.update(&contact, &changes)?;
            println!("Contact '{}' updated.", contact);
            print!("{}", saved.value);
            report_backup(&saved.backup);
        }

        ContactCommands::Delete { name, force } => {
            let matches: Vec<&Contact> = store.contacts().iter().filter(|c| c.name == name).collect();
            if matches.is_empty() {
                return Err(ContactError::contact_not_found(&name));
            }

            if !force {
                print!("{}", format_contact_details(&matches));
                println!("This will delete {} contact(s).", matches.len());
                println!("To proceed, run again with --force flag:");
                println!("  contacts delete \"{}\" --force", name);
                return Ok(());
            }

            let saved = store.delete(&name)?;
            println!("Deleted {} contact(s) named '{}'.", saved.value, name);
            report_backup(&saved.backup);
        }
    }

    Ok(())
}

/// Tell the user where the post-save backup went, or why it didn't happen
pub(crate) fn report_backup(status: &BackupStatus) {
    match status {
        BackupStatus::Created(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            println!("Backup saved: {}", name);
        }
        BackupStatus::Skipped => {}
        BackupStatus::Failed(reason) => {
            eprintln!("Warning: contacts were saved but the backup failed: {}", reason);
        }
    }
}
