//! Net profit after ads, goods, packaging and courier fees.

use phygital_core::{MarketingCampaign, Transaction, TransactionCategory};
use phygital_sheet::DashboardMetrics;
use serde::Serialize;

/// Flat courier fee charged per returned parcel, in DA.
pub const RETURN_FEE_DA: f64 = 600.0;
/// Courier fee charged per [`SHIPPING_FEE_REVENUE_STEP_DA`] of delivered revenue.
pub const SHIPPING_FEE_DA: f64 = 800.0;
pub const SHIPPING_FEE_REVENUE_STEP_DA: f64 = 5000.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub revenue: f64,
    pub marketing_spend: f64,
    pub product_cost: f64,
    pub packaging_cost: f64,
    pub return_fees: f64,
    pub shipping_fees: f64,
    pub total_costs: f64,
    pub net_profit: f64,
    /// Net profit per delivered parcel, rounded; `0` with no deliveries.
    pub profit_per_order: i64,
    /// Net margin in percent of revenue; `0` with no revenue.
    pub margin_percent: f64,
    /// Revenue over contribution before ads. `None` when costs already eat
    /// the whole revenue.
    pub break_even_roas: Option<f64>,
}

/// Combines the sheet metrics with ad spend and the accounting journal.
///
/// Goods cost is the sum of `stock_purchase` entries and packaging cost the
/// sum of `packaging` entries; other categories do not enter the figure.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn summarize_finance(
    metrics: &DashboardMetrics,
    campaigns: &[MarketingCampaign],
    transactions: &[Transaction],
) -> FinanceSummary {
    let sum_category = |category: TransactionCategory| -> f64 {
        transactions
            .iter()
            .filter(|t| t.category == category)
            .fold(0.0, |acc, t| acc + t.amount)
    };

    let revenue = metrics.revenue;
    let marketing_spend: f64 = campaigns.iter().fold(0.0, |acc, c| acc + c.spend);
    let product_cost = sum_category(TransactionCategory::StockPurchase);
    let packaging_cost = sum_category(TransactionCategory::Packaging);

    let return_fees = metrics.returns as f64 * RETURN_FEE_DA;
    let shipping_fees = round_half_up(revenue / SHIPPING_FEE_REVENUE_STEP_DA) * SHIPPING_FEE_DA;

    let total_costs = marketing_spend + product_cost + packaging_cost + return_fees + shipping_fees;
    let net_profit = revenue - total_costs;

    let profit_per_order = if metrics.delivered_count > 0 {
        round_half_up(net_profit / metrics.delivered_count as f64) as i64
    } else {
        0
    };

    let margin_percent = if revenue > 0.0 {
        net_profit / revenue * 100.0
    } else {
        0.0
    };

    let contribution = revenue - product_cost - return_fees - shipping_fees - packaging_cost;
    let break_even_roas = (contribution > 0.0).then(|| revenue / contribution);

    FinanceSummary {
        revenue,
        marketing_spend,
        product_cost,
        packaging_cost,
        return_fees,
        shipping_fees,
        total_costs,
        net_profit,
        profit_per_order,
        margin_percent,
        break_even_roas,
    }
}

/// Rounds half-way values toward positive infinity (`-2.5` → `-2`).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
