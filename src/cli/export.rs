//! Export CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{ContactError, ContactResult};
use crate::export::{export_contacts_csv, export_contacts_yaml};
use crate::storage::ContactStore;

/// Export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Yaml,
}

/// Write every contact to `output`, or stdout when no file is given
pub fn handle_export_command(
    store: &ContactStore,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ContactResult<()> {
    let mut writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(File::create(path).map_err(|e| {
            ContactError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?)),
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_contacts_csv(store.contacts(), &mut writer)?,
        ExportFormat::Yaml => export_contacts_yaml(store.contacts(), &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ContactError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!("Exported {} contact(s) to {}", store.len(), path.display());
    }

    Ok(())
}
