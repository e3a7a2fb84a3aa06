//! Stock, ledger and ad-campaign records kept alongside the order feed.
//!
//! Field names serialize in camelCase so documents written by the browser
//! dashboard can be read back unchanged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    /// Units on hand. Never negative once written through the stock store.
    pub stock: i64,
    pub purchase_price: f64,
    pub sell_price: f64,
    pub status: String,
    /// Marks the packaging item consumed once per shipped parcel.
    #[serde(default)]
    pub is_packaging: bool,
}

impl Product {
    /// Returns `true` when the product is in stock but below `threshold` units.
    #[must_use]
    pub fn is_running_low(&self, threshold: i64) -> bool {
        self.stock > 0 && self.stock < threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Income,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    StockPurchase,
    CurrencyPurchase,
    Ads,
    Packaging,
    Salary,
    Transport,
    Other,
    Sales,
}

impl TransactionCategory {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StockPurchase => "stock_purchase",
            Self::CurrencyPurchase => "currency_purchase",
            Self::Ads => "ads",
            Self::Packaging => "packaging",
            Self::Salary => "salary",
            Self::Transport => "transport",
            Self::Other => "other",
            Self::Sales => "sales",
        }
    }
}

impl std::str::FromStr for TransactionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock_purchase" => Ok(Self::StockPurchase),
            "currency_purchase" => Ok(Self::CurrencyPurchase),
            "ads" => Ok(Self::Ads),
            "packaging" => Ok(Self::Packaging),
            "salary" => Ok(Self::Salary),
            "transport" => Ok(Self::Transport),
            "other" => Ok(Self::Other),
            "sales" => Ok(Self::Sales),
            other => Err(format!("unknown transaction category \"{other}\"")),
        }
    }
}

/// A ledger line in the accounting journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Unix timestamp in milliseconds.
    pub date: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: TransactionCategory,
    pub description: String,
    pub amount: f64,
    /// When set on a stock purchase, the purchased goods are also added to stock.
    #[serde(default)]
    pub is_stock_entry: bool,
}

/// Goods received with a stock-purchase transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    pub name: String,
    pub sku: Option<String>,
    pub qty: i64,
    pub unit_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CampaignStatus {
    Active,
    Paused,
    Learning,
    Error,
}

/// Aggregate performance of one ad campaign, as exported from the ads manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCampaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    #[serde(default)]
    pub spend: f64,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub clicks: u64,
    #[serde(default)]
    pub purchases: u64,
    /// Return on ad spend.
    #[serde(default)]
    pub roas: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_uses_dashboard_field_names() {
        let tx = Transaction {
            id: "tx-1".into(),
            date: 1_700_000_000_000,
            kind: TransactionKind::Expense,
            category: TransactionCategory::StockPurchase,
            description: "Lot coques".into(),
            amount: 12_000.0,
            is_stock_entry: true,
        };
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["category"], "stock_purchase");
        assert_eq!(value["isStockEntry"], true);
    }

    #[test]
    fn product_without_packaging_flag_deserializes() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "sku": "SKU-1",
            "name": "Coque iPhone",
            "stock": 3,
            "purchasePrice": 250.0,
            "sellPrice": 1200.0,
            "status": "active"
        }))
        .unwrap();
        assert!(!product.is_packaging);
        assert!(product.is_running_low(5));
    }

    #[test]
    fn campaign_status_is_uppercase() {
        let campaign: MarketingCampaign = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "name": "[FB] Promo",
            "status": "ACTIVE",
            "spend": 1500.0,
            "roas": 1.2
        }))
        .unwrap();
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.clicks, 0);
    }

    #[test]
    fn category_parses_from_snake_case() {
        assert_eq!(
            "packaging".parse::<TransactionCategory>(),
            Ok(TransactionCategory::Packaging)
        );
        assert!("rent".parse::<TransactionCategory>().is_err());
    }
}
