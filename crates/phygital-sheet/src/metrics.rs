//! Dashboard KPIs derived from an order collection.

use phygital_core::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// KPI block shown on the dashboard. Recomputed from scratch on every load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    /// Sum of `total` over delivered orders, in DA.
    pub revenue: f64,
    /// Number of orders in the working set (not restricted to today).
    pub orders_today: usize,
    pub shipping: usize,
    pub returns: usize,
    pub confirmed: usize,
    /// Percentage of orders past initial placement.
    pub confirmation_rate: u32,
    /// Percentage of closed orders that were delivered.
    pub delivery_rate: u32,
    /// Percentage of closed orders that were returned.
    pub return_rate: u32,
    pub delivered_count: usize,
}

/// Aggregates `orders` into [`DashboardMetrics`].
///
/// Rates are rounded to the nearest integer; a zero denominator yields `0`.
#[must_use]
pub fn calculate_metrics(orders: &[Order]) -> DashboardMetrics {
    let count = |status: OrderStatus| orders.iter().filter(|o| o.status == status).count();

    let delivered = count(OrderStatus::Delivered);
    let confirmed = count(OrderStatus::Confirmed);
    let shipping = count(OrderStatus::Shipping);
    let returned = count(OrderStatus::Returned);
    let closed = orders.iter().filter(|o| o.status.is_closed()).count();

    let revenue = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .fold(0.0, |acc, o| acc + o.total);

    DashboardMetrics {
        revenue,
        orders_today: orders.len(),
        shipping,
        returns: returned,
        confirmed,
        confirmation_rate: percent(confirmed + shipping + delivered + returned, orders.len()),
        delivery_rate: percent(delivered, closed),
        return_rate: percent(returned, closed),
        delivered_count: delivered,
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
