//! Profitability figures, threshold alerts and order-status stock movements
//! built on the dashboard data.

pub mod finance;
pub mod monitor;
pub mod sink;
pub mod workflow;

pub use finance::{summarize_finance, FinanceSummary};
pub use monitor::{monitor_kpis, MonitorInput};
pub use sink::{FanOutSink, NotificationSink, StoreSink, TracingSink};
pub use workflow::{apply_status_change, change_order_status, StatusChange};
