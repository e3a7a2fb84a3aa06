//! Backup command handlers.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use phygital_store::{export_backup, import_backup, Backup, DocumentStore};

/// Sub-commands available under `backup`.
#[derive(Debug, Subcommand)]
pub enum BackupCommands {
    /// Write every stored document to one JSON file
    Export {
        /// Destination file (defaults to `phygital_backup_<date>.json`)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Restore documents from a backup file, overwriting matching keys
    Import { file: PathBuf },
}

fn default_backup_path() -> PathBuf {
    PathBuf::from(format!(
        "phygital_backup_{}.json",
        chrono::Local::now().format("%Y-%m-%d")
    ))
}

pub(crate) fn write_backup<S: DocumentStore + ?Sized>(
    store: &S,
    path: &Path,
) -> anyhow::Result<usize> {
    let backup = export_backup(store)?;
    let json = serde_json::to_string_pretty(&backup)?;
    std::fs::write(path, json)
        .map_err(|e| anyhow::anyhow!("failed to write backup {}: {e}", path.display()))?;
    Ok(backup.data.len())
}

pub(crate) fn read_backup<S: DocumentStore + ?Sized>(
    store: &S,
    path: &Path,
) -> anyhow::Result<usize> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read backup {}: {e}", path.display()))?;
    let backup: Backup = serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("invalid backup file {}: {e}", path.display()))?;
    Ok(import_backup(store, &backup)?)
}

pub(crate) fn run<S: DocumentStore + ?Sized>(
    store: &S,
    command: BackupCommands,
) -> anyhow::Result<()> {
    match command {
        BackupCommands::Export { output } => {
            let path = output.unwrap_or_else(default_backup_path);
            let count = write_backup(store, &path)?;
            println!("exported {count} documents to {}", path.display());
        }
        BackupCommands::Import { file } => {
            let count = read_backup(store, &file)?;
            println!("restored {count} documents from {}", file.display());
        }
    }
    Ok(())
}
