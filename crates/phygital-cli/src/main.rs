mod backup;
mod feed;
mod ledger;
mod notifications;
mod orders;
mod stock;

use clap::{Parser, Subcommand};
use phygital_store::FileStore;
use tracing_subscriber::EnvFilter;

use crate::backup::BackupCommands;
use crate::ledger::TxCommands;
use crate::notifications::NotificationCommands;
use crate::orders::OrderCommands;
use crate::stock::StockCommands;

#[derive(Debug, Parser)]
#[command(name = "phygital")]
#[command(about = "Order feed, stock and KPI tooling for the PhygitalOS back office")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the order sheet and print the dashboard KPIs
    Dashboard {
        /// CSV export URL (overrides PHYGITAL_SHEET_CSV_URL)
        #[arg(long)]
        url: Option<String>,
        /// Print metrics, orders and parse report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Orders from the sheet and their local status changes
    Orders {
        #[command(subcommand)]
        command: OrderCommands,
    },
    /// Compute net profit, margin and break-even ROAS
    Finance {
        /// CSV export URL (overrides PHYGITAL_SHEET_CSV_URL)
        #[arg(long)]
        url: Option<String>,
        /// JSON file holding the ad campaigns to account for
        #[arg(long)]
        campaigns: Option<std::path::PathBuf>,
    },
    /// Check KPIs against thresholds and record alerts
    Monitor {
        /// CSV export URL (overrides PHYGITAL_SHEET_CSV_URL)
        #[arg(long)]
        url: Option<String>,
        /// JSON file holding the ad campaigns to account for
        #[arg(long)]
        campaigns: Option<std::path::PathBuf>,
    },
    /// Inventory management
    Stock {
        #[command(subcommand)]
        command: StockCommands,
    },
    /// Accounting journal
    Tx {
        #[command(subcommand)]
        command: TxCommands,
    },
    /// Notification feed
    Notifications {
        #[command(subcommand)]
        command: NotificationCommands,
    },
    /// Export or restore every document of the local store
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = phygital_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("phygital ready (env: {}); see --help for commands", config.env);
        return Ok(());
    };

    match command {
        Commands::Dashboard { url, json } => {
            feed::run_dashboard(&config, url.as_deref(), json).await?;
        }
        Commands::Orders { command } => {
            orders::run(&config, &open_store(&config)?, command).await?;
        }
        Commands::Finance { url, campaigns } => {
            let store = open_store(&config)?;
            feed::run_finance(&config, &store, url.as_deref(), campaigns.as_deref()).await?;
        }
        Commands::Monitor { url, campaigns } => {
            let store = open_store(&config)?;
            feed::run_monitor(&config, &store, url.as_deref(), campaigns.as_deref()).await?;
        }
        Commands::Stock { command } => stock::run(&open_store(&config)?, command)?,
        Commands::Tx { command } => ledger::run(&open_store(&config)?, command)?,
        Commands::Notifications { command } => {
            notifications::run(&open_store(&config)?, command)?;
        }
        Commands::Backup { command } => backup::run(&open_store(&config)?, command)?,
    }

    Ok(())
}

fn open_store(config: &phygital_core::AppConfig) -> anyhow::Result<FileStore> {
    Ok(FileStore::open(config.data_dir.clone())?)
}
