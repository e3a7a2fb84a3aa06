//! Notification feed command handlers.

use clap::Subcommand;
use phygital_store::NotificationStore;

/// Sub-commands available under `notifications`.
#[derive(Debug, Subcommand)]
pub enum NotificationCommands {
    /// Show the feed, newest first
    List {
        /// Only show unread notifications
        #[arg(long)]
        unread: bool,
    },
    /// Mark every notification as read
    Read,
    /// Empty the feed
    Clear,
}

pub(crate) fn run<S: NotificationStore + ?Sized>(
    store: &S,
    command: NotificationCommands,
) -> anyhow::Result<()> {
    match command {
        NotificationCommands::List { unread } => {
            let feed: Vec<_> = store
                .list_notifications()?
                .into_iter()
                .filter(|n| !unread || !n.read)
                .collect();
            if feed.is_empty() {
                println!("no notifications");
                return Ok(());
            }
            for n in &feed {
                let when = chrono::DateTime::from_timestamp_millis(n.timestamp)
                    .map(|d| d.format("%d/%m/%Y %H:%M").to_string())
                    .unwrap_or_default();
                let marker = if n.read { ' ' } else { '*' };
                println!("{marker} {when:<17}[{}] {}: {}", n.level, n.title, n.message);
            }
        }
        NotificationCommands::Read => {
            let changed = store.mark_all_read()?;
            println!("marked {changed} notifications as read");
        }
        NotificationCommands::Clear => {
            store.clear_notifications()?;
            println!("notifications cleared");
        }
    }
    Ok(())
}
