//! Order feed normalizer and dashboard metrics for spreadsheet CSV exports.
//!
//! The pipeline is `fetch → parse → normalize → aggregate`: [`SheetClient`]
//! retrieves the export, [`parse_orders`] maps arbitrary headers onto the
//! canonical [`phygital_core::Order`] schema, and [`calculate_metrics`]
//! derives the KPI block shown on the dashboard.

pub mod client;
pub mod columns;
pub mod dashboard;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod normalize;
pub mod row;
pub mod wilayas;

pub use client::SheetClient;
pub use columns::{ColumnMap, OrderField};
pub use dashboard::{fetch_dashboard_data, DashboardData};
pub use error::SheetError;
pub use feed::{parse_orders, parse_orders_on, ParseReport, ParsedFeed};
pub use metrics::{calculate_metrics, DashboardMetrics};
pub use normalize::{
    normalize_date, normalize_date_on, normalize_status, normalize_wilaya, parse_amount,
};
pub use row::split_row;
pub use wilayas::WILAYAS;
