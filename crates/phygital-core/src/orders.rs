use serde::{Deserialize, Serialize};

/// Lifecycle state of an order as reported by the courier/spreadsheet.
///
/// `Delivered` and `Returned` are terminal ("closed"); the others are still
/// in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Delivered,
    Returned,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
        OrderStatus::Returned,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Returned => "returned",
        }
    }

    /// Returns `true` for terminal states (`delivered` or `returned`).
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Returned)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown order status \"{s}\""))
    }
}

/// An order row from the spreadsheet export, normalized to the canonical
/// schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Courier tracking number, or `CMD-<line>` when the export has none.
    pub id: String,
    /// Order date as `DD/MM/YYYY` when the source value was recognizable.
    pub date: String,
    pub client: String,
    pub phone: String,
    /// Canonical wilaya name, the first token of the raw value, or `"Inconnu"`.
    pub wilaya: String,
    pub product: String,
    /// Order total in dinars (DA).
    pub total: f64,
    pub status: OrderStatus,
}
