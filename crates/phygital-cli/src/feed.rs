//! Commands that read the order sheet: dashboard, finance, monitor.
//!
//! Each command fetches the CSV export once and works on the parsed snapshot;
//! nothing from the sheet is written to the local store.

use std::path::Path;

use phygital_core::{AppConfig, MarketingCampaign};
use phygital_kpi::{
    monitor_kpis, summarize_finance, FanOutSink, FinanceSummary, MonitorInput, StoreSink,
    TracingSink,
};
use phygital_sheet::{fetch_dashboard_data, DashboardData, ParseReport, SheetClient};
use phygital_store::{FileStore, StockStore, TransactionStore};

pub(crate) async fn load_dashboard(
    config: &AppConfig,
    url: Option<&str>,
) -> anyhow::Result<DashboardData> {
    let client = SheetClient::new(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build sheet client: {e}"))?;
    let source = url.or(config.sheet_csv_url.as_deref());
    let data = fetch_dashboard_data(&client, source).await?;
    Ok(data)
}

/// Reads ad campaigns from a JSON array file. No file means no campaigns.
pub(crate) fn load_campaigns(path: Option<&Path>) -> anyhow::Result<Vec<MarketingCampaign>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read campaigns file {}: {e}", path.display()))?;
    serde_json::from_str(&text)
        .map_err(|e| anyhow::anyhow!("invalid campaigns file {}: {e}", path.display()))
}

fn print_report(report: &ParseReport) {
    println!(
        "parsed {} of {} data lines ({} dropped)",
        report.accepted, report.data_lines, report.dropped
    );
    if !report.missing_columns.is_empty() {
        println!("missing columns: {}", report.missing_columns.join(", "));
    }
    if report.has_fallbacks() {
        println!(
            "fallbacks: {} synthetic ids, {} dates defaulted, {} dates unrecognized, \
             {} wilayas missing, {} wilayas unmatched, {} statuses unrecognized",
            report.synthetic_ids,
            report.dates_defaulted,
            report.dates_unrecognized,
            report.wilayas_missing,
            report.wilayas_unmatched,
            report.statuses_unrecognized
        );
    }
}

/// # Errors
///
/// Returns an error if the sheet source is not configured or cannot be fetched.
pub(crate) async fn run_dashboard(
    config: &AppConfig,
    url: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let data = load_dashboard(config, url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    let m = &data.metrics;
    println!("{:<22}{:.0} DA", "revenue", m.revenue);
    println!("{:<22}{}", "orders", m.orders_today);
    println!("{:<22}{}", "confirmed", m.confirmed);
    println!("{:<22}{}", "shipping", m.shipping);
    println!("{:<22}{}", "delivered", m.delivered_count);
    println!("{:<22}{}", "returns", m.returns);
    println!("{:<22}{}%", "confirmation rate", m.confirmation_rate);
    println!("{:<22}{}%", "delivery rate", m.delivery_rate);
    println!("{:<22}{}%", "return rate", m.return_rate);
    println!();
    print_report(&data.report);
    Ok(())
}

fn print_finance(summary: &FinanceSummary) {
    let rows = [
        ("revenue", summary.revenue),
        ("marketing spend", summary.marketing_spend),
        ("product cost", summary.product_cost),
        ("packaging", summary.packaging_cost),
        ("return fees", summary.return_fees),
        ("shipping fees", summary.shipping_fees),
        ("total costs", summary.total_costs),
        ("net profit", summary.net_profit),
    ];
    for (label, value) in rows {
        println!("{label:<22}{value:>12.0} DA");
    }
    println!("{:<22}{:>12} DA", "profit per order", summary.profit_per_order);
    println!("{:<22}{:>12.1} %", "net margin", summary.margin_percent);
    match summary.break_even_roas {
        Some(roas) => println!("{:<22}{roas:>12.2}", "break-even ROAS"),
        None => println!("{:<22}{:>12}", "break-even ROAS", "n/a"),
    }
}

/// # Errors
///
/// Returns an error if the sheet cannot be fetched or the local journal or
/// campaigns file cannot be read.
pub(crate) async fn run_finance(
    config: &AppConfig,
    store: &FileStore,
    url: Option<&str>,
    campaigns: Option<&Path>,
) -> anyhow::Result<()> {
    let campaigns = load_campaigns(campaigns)?;
    let transactions = store.list_transactions()?;
    let data = load_dashboard(config, url).await?;

    let summary = summarize_finance(&data.metrics, &campaigns, &transactions);
    print_finance(&summary);
    Ok(())
}

/// Runs the KPI monitor, persisting alerts to the notification feed and
/// logging critical ones.
///
/// # Errors
///
/// Returns an error if the sheet cannot be fetched or the local store or
/// campaigns file cannot be read.
pub(crate) async fn run_monitor(
    config: &AppConfig,
    store: &FileStore,
    url: Option<&str>,
    campaigns: Option<&Path>,
) -> anyhow::Result<()> {
    let campaigns = load_campaigns(campaigns)?;
    let transactions = store.list_transactions()?;
    let products = store.list_products()?;
    let data = load_dashboard(config, url).await?;
    let finance = summarize_finance(&data.metrics, &campaigns, &transactions);

    let store_sink = StoreSink::new(store);
    let sink = FanOutSink::new().with(&store_sink).with(&TracingSink);
    let alerts = monitor_kpis(
        &MonitorInput {
            metrics: Some(&data.metrics),
            products: &products,
            campaigns: &campaigns,
            finance: Some(&finance),
        },
        &sink,
    );

    if alerts.is_empty() {
        println!("all KPIs within thresholds");
        return Ok(());
    }
    for alert in &alerts {
        println!("[{}] {}: {}", alert.level, alert.title, alert.message);
    }
    tracing::info!(alerts = alerts.len(), "kpi alerts recorded");
    Ok(())
}
