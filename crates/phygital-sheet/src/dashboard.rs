//! Single entry point used by the CLI: fetch the export, parse it, aggregate.

use serde::Serialize;

use phygital_core::Order;

use crate::client::SheetClient;
use crate::error::SheetError;
use crate::feed::{parse_orders, ParseReport};
use crate::metrics::{calculate_metrics, DashboardMetrics};

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub metrics: DashboardMetrics,
    pub orders: Vec<Order>,
    pub report: ParseReport,
}

/// Fetches the configured CSV export and derives orders and metrics from it.
///
/// # Errors
///
/// - [`SheetError::SourceNotConfigured`]: `source_url` is `None` or blank;
///   returned before any network access.
/// - Any error from [`SheetClient::fetch_csv`]; nothing is retried.
pub async fn fetch_dashboard_data(
    client: &SheetClient,
    source_url: Option<&str>,
) -> Result<DashboardData, SheetError> {
    let url = source_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or(SheetError::SourceNotConfigured)?;

    let text = client.fetch_csv(url).await?;
    let feed = parse_orders(&text);

    tracing::info!(
        orders = feed.report.accepted,
        dropped = feed.report.dropped,
        "parsed order sheet"
    );
    if feed.report.has_fallbacks() {
        tracing::warn!(
            missing_columns = ?feed.report.missing_columns,
            synthetic_ids = feed.report.synthetic_ids,
            dates_defaulted = feed.report.dates_defaulted,
            dates_unrecognized = feed.report.dates_unrecognized,
            wilayas_unmatched = feed.report.wilayas_unmatched,
            statuses_unrecognized = feed.report.statuses_unrecognized,
            "order sheet contained values that fell back to defaults"
        );
    }

    let metrics = calculate_metrics(&feed.orders);
    Ok(DashboardData {
        metrics,
        orders: feed.orders,
        report: feed.report,
    })
}
