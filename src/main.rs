use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use contacts::audit::AuditLogger;
use contacts::cli::{
    handle_backup_command, handle_contact_command, handle_export_command, BackupCommands,
    ContactCommands, ExportFormat,
};
use contacts::config::{paths::DATA_DIR_ENV, ContactPaths, Settings};
use contacts::storage::{open_store, LoadOutcome};

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Command-line contact book with automatic backups",
    long_about = "A command-line contact book. Contacts live in a single JSON file \
                  and every change is followed by a timestamped backup."
)]
struct Cli {
    /// Directory holding contacts.json, backups and settings
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Contact(ContactCommands),

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export all contacts
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Save the effective settings to config.json for editing
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A second subscriber can't be installed; diagnostics are best-effort
    let _ = contacts::logging::init();

    let paths = match cli.data_dir {
        Some(dir) => ContactPaths::with_base_dir(dir),
        None => ContactPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let (mut store, outcome) = open_store(&paths, &settings)?;
    match outcome {
        LoadOutcome::Loaded(_) => {}
        LoadOutcome::Missing => {
            eprintln!(
                "No contacts file at {} yet; starting with an empty contact list.",
                store.path().display()
            );
        }
        LoadOutcome::Failed(e) => {
            eprintln!("Warning: could not load {}: {}", store.path().display(), e);
            eprintln!("Starting with an empty contact list.");
            eprintln!("The unreadable file is copied to the backup directory before the next save.");
        }
    }

    match cli.command {
        Some(Commands::Contact(cmd)) => {
            handle_contact_command(&mut store, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&store, format, output)?;
        }
        Some(Commands::History { limit }) => {
            let entries = AuditLogger::new(paths.audit_log()).read_recent(limit)?;
            if entries.is_empty() {
                println!("No history recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        Some(Commands::Config { write }) => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Contacts file:    {}", paths.contacts_file().display());
            println!("Backup directory: {}", settings.backup_dir(&paths).display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Backup on save:  {}", settings.backup_on_save);
            println!("  Recent backups:  {}", settings.recent_backup_count);
            println!("  Audit enabled:   {}", settings.audit_enabled);

            if write {
                settings.save(&paths)?;
                println!();
                println!("Settings written to {}", paths.settings_file().display());
            }
        }
        None => {
            println!("Contacts - command-line contact book");
            println!();
            println!("{} contact(s) in {}", store.len(), store.path().display());
            println!("Run 'contacts --help' for usage information.");
        }
    }

    Ok(())
}
