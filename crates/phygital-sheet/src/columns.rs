//! Header inference: maps arbitrary spreadsheet column names onto the
//! canonical order fields.

use crate::row::clean_cell;

/// A canonical order field that can be sourced from a spreadsheet column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    Date,
    Client,
    Phone,
    Wilaya,
    Product,
    Price,
    Status,
    Tracking,
}

impl OrderField {
    pub const ALL: [OrderField; 8] = [
        OrderField::Date,
        OrderField::Client,
        OrderField::Phone,
        OrderField::Wilaya,
        OrderField::Product,
        OrderField::Price,
        OrderField::Status,
        OrderField::Tracking,
    ];

    /// Lower-case header fragments that identify this field. A header matches
    /// when it contains any of them.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            OrderField::Date => &["date", "created_at", "time"],
            OrderField::Client => &["full name", "client", "name", "nom"],
            OrderField::Phone => &["phone", "tél", "mobile", "telephone"],
            OrderField::Wilaya => &["province", "wilaya", "city", "ville"],
            OrderField::Product => &["product name", "produit"],
            OrderField::Price => &["total price", "total", "price", "prix"],
            OrderField::Status => &["situation", "statut", "status", "état"],
            OrderField::Tracking => &["tracking", "track", "colis"],
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderField::Date => "date",
            OrderField::Client => "client",
            OrderField::Phone => "phone",
            OrderField::Wilaya => "wilaya",
            OrderField::Product => "product",
            OrderField::Price => "total",
            OrderField::Status => "status",
            OrderField::Tracking => "id",
        }
    }

    fn slot(self) -> usize {
        match self {
            OrderField::Date => 0,
            OrderField::Client => 1,
            OrderField::Phone => 2,
            OrderField::Wilaya => 3,
            OrderField::Product => 4,
            OrderField::Price => 5,
            OrderField::Status => 6,
            OrderField::Tracking => 7,
        }
    }
}

/// Column index of every canonical field in one export, `None` when no
/// header matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnMap {
    indices: [Option<usize>; 8],
}

impl ColumnMap {
    /// Builds the map from the header line.
    ///
    /// Headers are split on every comma (quoted commas are not honoured on
    /// the header line), lower-cased and stripped of surrounding quotes. For
    /// each field the leftmost matching column wins, even if a later column
    /// would match more precisely.
    #[must_use]
    pub fn from_header(line: &str) -> Self {
        let headers: Vec<String> = line
            .to_lowercase()
            .split(',')
            .map(|h| clean_cell(h.trim()).to_owned())
            .collect();

        let mut indices = [None; 8];
        for field in OrderField::ALL {
            indices[field.slot()] = headers
                .iter()
                .position(|h| field.aliases().iter().any(|alias| h.contains(alias)));
        }
        Self { indices }
    }

    #[must_use]
    pub fn index_of(&self, field: OrderField) -> Option<usize> {
        self.indices[field.slot()]
    }

    /// Returns the trimmed cell for `field`, or `None` when the column is
    /// missing, the row is too short, or the cell is empty.
    #[must_use]
    pub fn cell<'a>(&self, row: &'a [String], field: OrderField) -> Option<&'a str> {
        self.index_of(field)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Fields with no matching column, in canonical order.
    #[must_use]
    pub fn missing(&self) -> Vec<OrderField> {
        OrderField::ALL
            .into_iter()
            .filter(|field| self.index_of(*field).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_typical_yalidine_export() {
        let map = ColumnMap::from_header(
            "Tracking,Date,Full Name,Phone,Wilaya,Product Name,Total Price,Situation",
        );
        assert_eq!(map.index_of(OrderField::Tracking), Some(0));
        assert_eq!(map.index_of(OrderField::Date), Some(1));
        assert_eq!(map.index_of(OrderField::Client), Some(2));
        assert_eq!(map.index_of(OrderField::Phone), Some(3));
        assert_eq!(map.index_of(OrderField::Wilaya), Some(4));
        assert_eq!(map.index_of(OrderField::Product), Some(5));
        assert_eq!(map.index_of(OrderField::Price), Some(6));
        assert_eq!(map.index_of(OrderField::Status), Some(7));
        assert!(map.missing().is_empty());
    }

    #[test]
    fn maps_french_headers_with_quotes() {
        let map =
            ColumnMap::from_header("\"Nom\",\"Tél\",\"Ville\",\"Produit\",\"Prix\",\"Statut\"");
        assert_eq!(map.index_of(OrderField::Client), Some(0));
        assert_eq!(map.index_of(OrderField::Phone), Some(1));
        assert_eq!(map.index_of(OrderField::Wilaya), Some(2));
        assert_eq!(map.index_of(OrderField::Product), Some(3));
        assert_eq!(map.index_of(OrderField::Price), Some(4));
        assert_eq!(map.index_of(OrderField::Status), Some(5));
        assert_eq!(map.missing(), vec![OrderField::Date, OrderField::Tracking]);
    }

    #[test]
    fn leftmost_match_wins() {
        // "Product Name" contains "name", so it shadows the later client column.
        let map = ColumnMap::from_header("Product Name,Client");
        assert_eq!(map.index_of(OrderField::Client), Some(0));
        assert_eq!(map.index_of(OrderField::Product), Some(0));
    }

    #[test]
    fn cell_is_none_for_missing_column_short_row_or_empty_value() {
        let map = ColumnMap::from_header("date,client,status");
        let row = vec!["01/02/2024".to_string(), String::new()];
        assert_eq!(map.cell(&row, OrderField::Date), Some("01/02/2024"));
        assert_eq!(map.cell(&row, OrderField::Client), None);
        assert_eq!(map.cell(&row, OrderField::Status), None);
        assert_eq!(map.cell(&row, OrderField::Phone), None);
    }
}
