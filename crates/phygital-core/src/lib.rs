pub mod app_config;
pub mod catalog;
pub mod config;
pub mod notifications;
pub mod orders;

pub use app_config::{AppConfig, Environment};
pub use catalog::{
    CampaignStatus, MarketingCampaign, Product, StockEntry, Transaction, TransactionCategory,
    TransactionKind,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use notifications::{AppNotification, NotificationLevel};
pub use orders::{Order, OrderStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
