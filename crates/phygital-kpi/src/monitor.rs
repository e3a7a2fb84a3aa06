//! Threshold checks over the dashboard KPIs.

use phygital_core::{AppNotification, MarketingCampaign, NotificationLevel, Product};
use phygital_sheet::DashboardMetrics;

use crate::finance::FinanceSummary;
use crate::sink::NotificationSink;

/// Minimum acceptable confirmation rate, in percent.
pub const MIN_CONFIRMATION_RATE: u32 = 45;
/// Confirmation rate is only judged above this many orders.
pub const CONFIRMATION_MIN_ORDERS: usize = 5;
pub const MAX_RETURN_RATE: u32 = 20;
pub const MIN_AVERAGE_ROAS: f64 = 1.8;
/// A campaign spending more than this (DA) makes a low ROAS actionable.
pub const ROAS_SPEND_FLOOR: f64 = 1000.0;
pub const MIN_NET_MARGIN_PERCENT: f64 = 10.0;
/// Products with fewer units than this (and more than zero) are critical.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Everything the monitor looks at. Absent parts skip their checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonitorInput<'a> {
    pub metrics: Option<&'a DashboardMetrics>,
    pub products: &'a [Product],
    pub campaigns: &'a [MarketingCampaign],
    pub finance: Option<&'a FinanceSummary>,
}

/// Runs every check in order, sends each alert to `sink` and returns them.
pub fn monitor_kpis(input: &MonitorInput<'_>, sink: &dyn NotificationSink) -> Vec<AppNotification> {
    let alerts: Vec<AppNotification> = [
        input.metrics.and_then(check_confirmation),
        input.metrics.and_then(check_returns),
        check_roas(input.campaigns),
        input.finance.and_then(check_margin),
        check_stock(input.products),
    ]
    .into_iter()
    .flatten()
    .collect();

    for alert in &alerts {
        sink.notify(alert);
    }
    tracing::debug!(alerts = alerts.len(), "kpi monitor pass complete");
    alerts
}

fn check_confirmation(metrics: &DashboardMetrics) -> Option<AppNotification> {
    (metrics.confirmation_rate < MIN_CONFIRMATION_RATE
        && metrics.orders_today > CONFIRMATION_MIN_ORDERS)
        .then(|| {
            AppNotification::new(
                "Performance Ventes Faible",
                format!(
                    "Alerte : Le taux de confirmation est de {}%. Objectif : {MIN_CONFIRMATION_RATE}% min.",
                    metrics.confirmation_rate
                ),
                NotificationLevel::Error,
            )
        })
}

fn check_returns(metrics: &DashboardMetrics) -> Option<AppNotification> {
    (metrics.return_rate > MAX_RETURN_RATE).then(|| {
        AppNotification::new(
            "Alerte Logistique : Retours",
            format!(
                "Attention, votre taux de retour est monté à {}%. Le seuil critique de {MAX_RETURN_RATE}% est dépassé.",
                metrics.return_rate
            ),
            NotificationLevel::Error,
        )
    })
}

#[allow(clippy::cast_precision_loss)]
fn check_roas(campaigns: &[MarketingCampaign]) -> Option<AppNotification> {
    if campaigns.is_empty() {
        return None;
    }
    let average = campaigns.iter().fold(0.0, |acc, c| acc + c.roas) / campaigns.len() as f64;
    let spending = campaigns.iter().any(|c| c.spend > ROAS_SPEND_FLOOR);

    (average < MIN_AVERAGE_ROAS && spending).then(|| {
        AppNotification::new(
            "Marketing Non Rentable",
            format!("ROAS moyen critique : {average:.2}. Arrêtez les campagnes à perte."),
            NotificationLevel::Error,
        )
    })
}

fn check_margin(finance: &FinanceSummary) -> Option<AppNotification> {
    if finance.revenue <= 0.0 {
        return None;
    }
    let margin = finance.net_profit / finance.revenue * 100.0;
    (margin < MIN_NET_MARGIN_PERCENT).then(|| {
        AppNotification::new(
            "Marge Nette Critique",
            format!(
                "Votre marge nette est de {}%. Seuil de sécurité : {MIN_NET_MARGIN_PERCENT}%.",
                (margin + 0.5).floor()
            ),
            NotificationLevel::Warning,
        )
    })
}

fn check_stock(products: &[Product]) -> Option<AppNotification> {
    let low = products
        .iter()
        .filter(|p| p.is_running_low(LOW_STOCK_THRESHOLD))
        .count();
    (low > 0).then(|| {
        AppNotification::new(
            "Stock Critique",
            format!("{low} produits sont presque épuisés. Réapprovisionnez rapidement."),
            NotificationLevel::Warning,
        )
    })
}

#[cfg(test)]
#[path = "monitor_test.rs"]
mod tests;
