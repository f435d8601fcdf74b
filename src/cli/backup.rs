//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use clap::Subcommand;

use crate::backup::RestoreManager;
use crate::config::Settings;
use crate::display::backup::format_size;
use crate::display::format_backup_list;
use crate::error::{ContactError, ContactResult};
use crate::storage::ContactStore;

use super::contact::report_backup;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Back up the contact file now
    Create,

    /// List the most recent backups
    List {
        /// How many backups to show (defaults to the configured count)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Restore the contact file from a backup
    Restore {
        /// Backup filename (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    store: &mut ContactStore,
    settings: &Settings,
    cmd: BackupCommands,
) -> ContactResult<()> {
    match cmd {
        BackupCommands::Create => {
            let backup_path = store.backups().create_backup(store.path())?;
            println!("Backup created: {}", backup_path.display());
        }

        BackupCommands::List { limit, verbose } => {
            let limit = limit.unwrap_or(settings.recent_backup_count);
            let backups = store.backups().list_backups()?;
            let total = backups.len();
            let recent: Vec<_> = backups.into_iter().take(limit).collect();

            if recent.is_empty() {
                println!("No backups found.");
                println!("Create one with: contacts backup create");
                return Ok(());
            }

            println!("Recent Backups");
            println!("==============");
            print!("{}", format_backup_list(&recent, verbose));
            println!();
            println!("Showing {} of {} backup(s)", recent.len(), total);
        }

        BackupCommands::Restore { backup, force } => {
            let filename = if backup.eq_ignore_ascii_case("latest") {
                store
                    .backups()
                    .latest_backup()?
                    .map(|b| b.filename)
                    .ok_or_else(|| ContactError::backup_not_found("latest"))?
            } else {
                backup
            };

            let backup_path = store
                .backups()
                .resolve_backup_path(&filename)
                .ok_or_else(|| ContactError::backup_not_found(&filename))?;

            if !force {
                let info = RestoreManager::new(store.path().to_path_buf())
                    .validate_backup(&backup_path)?;

                println!("Backup: {}", backup_path.display());
                if let Some(date) = info.backup_date {
                    println!("  Taken:    {}", date.format("%Y-%m-%d %H:%M"));
                }
                println!("  Contacts: {}", info.contact_count);
                println!("  Size:     {}", format_size(info.size_bytes));
                println!();
                println!("WARNING: This will replace all current contacts!");
                println!("To proceed, run again with --force flag:");
                println!("  contacts backup restore {} --force", filename);
                return Ok(());
            }

            let saved = store.restore_backup(&filename)?;
            report_backup(&saved.backup);
            println!("{}", saved.value.summary());
        }
    }

    Ok(())
}
