//! Repositories for stock, ledger and notifications over a flat JSON
//! document store.
//!
//! Each entity lives under one key, serialized as JSON, the same
//! layout the browser dashboard keeps in local storage. Callers receive the
//! store as a dependency; nothing here touches global state.

pub mod backup;
pub mod document;
pub mod notifications;
pub mod order_status;
pub mod stock;
pub mod transactions;

use std::path::PathBuf;

use thiserror::Error;

pub use backup::{export_backup, import_backup, Backup, BACKUP_VERSION};
pub use document::{DocumentStore, FileStore, MemoryStore};
pub use notifications::{NotificationStore, MAX_NOTIFICATIONS};
pub use order_status::OrderStatusStore;
pub use stock::StockStore;
pub use transactions::TransactionStore;

/// Storage key of the product list.
pub const STOCK_KEY: &str = "phygital_local_stock";
/// Storage key of the accounting journal.
pub const TRANSACTIONS_KEY: &str = "phygital_local_tx";
/// Storage key of the notification feed.
pub const NOTIFICATIONS_KEY: &str = "phygital_notifs";
/// Storage key of locally changed order statuses.
pub const ORDER_STATUS_KEY: &str = "phygital_order_status";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document under key \"{key}\": {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid storage key \"{0}\"")]
    InvalidKey(String),
}
