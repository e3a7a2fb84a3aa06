//! CSV export → [`Order`] list, plus a summary of every fallback taken.

use chrono::NaiveDate;
use phygital_core::{Order, OrderStatus};
use serde::Serialize;

use crate::columns::{ColumnMap, OrderField};
use crate::normalize::{
    classify_status, match_date, match_wilaya, parse_amount, DateMatch, WilayaMatch, UNKNOWN,
};
use crate::row::split_row;

/// Counts of rows dropped and values defaulted while parsing one export.
///
/// Parsing never fails on bad data; this is where the damage shows up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Lines after the header, blank ones included.
    pub data_lines: usize,
    pub accepted: usize,
    /// Lines with fewer than two cells.
    pub dropped: usize,
    /// Canonical fields with no matching header column.
    pub missing_columns: Vec<&'static str>,
    /// Rows given a `CMD-<line>` placeholder id.
    pub synthetic_ids: usize,
    /// Empty date cells replaced by today.
    pub dates_defaulted: usize,
    /// Date cells kept verbatim because no layout matched.
    pub dates_unrecognized: usize,
    pub wilayas_missing: usize,
    /// Region cells with no canonical wilaya, reduced to their first token.
    pub wilayas_unmatched: usize,
    /// Non-empty status labels with no known keyword, counted as pending.
    pub statuses_unrecognized: usize,
}

impl ParseReport {
    /// Returns `true` if any row was dropped or any value defaulted.
    #[must_use]
    pub fn has_fallbacks(&self) -> bool {
        self.dropped > 0
            || !self.missing_columns.is_empty()
            || self.synthetic_ids > 0
            || self.dates_defaulted > 0
            || self.dates_unrecognized > 0
            || self.wilayas_missing > 0
            || self.wilayas_unmatched > 0
            || self.statuses_unrecognized > 0
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedFeed {
    pub orders: Vec<Order>,
    pub report: ParseReport,
}

/// Parses a CSV export using the local calendar date for empty date cells.
#[must_use]
pub fn parse_orders(csv_text: &str) -> ParsedFeed {
    parse_orders_on(csv_text, chrono::Local::now().date_naive())
}

/// Parses a CSV export into orders.
///
/// The first line is the header (see [`ColumnMap::from_header`]). Every
/// later line with at least two cells becomes exactly one [`Order`]; shorter
/// lines are dropped. Text with fewer than two lines yields no orders.
#[must_use]
pub fn parse_orders_on(csv_text: &str, today: NaiveDate) -> ParsedFeed {
    let lines: Vec<&str> = csv_text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() < 2 {
        return ParsedFeed::default();
    }

    let columns = ColumnMap::from_header(lines[0]);
    let mut report = ParseReport {
        data_lines: lines.len() - 1,
        missing_columns: columns.missing().into_iter().map(OrderField::as_str).collect(),
        ..ParseReport::default()
    };

    let mut orders = Vec::with_capacity(lines.len() - 1);
    for (line_no, line) in lines.iter().enumerate().skip(1) {
        let row = split_row(line);
        if row.len() < 2 {
            report.dropped += 1;
            continue;
        }
        orders.push(build_order(&row, &columns, line_no, today, &mut report));
    }

    report.accepted = orders.len();
    ParsedFeed { orders, report }
}

fn build_order(
    row: &[String],
    columns: &ColumnMap,
    line_no: usize,
    today: NaiveDate,
    report: &mut ParseReport,
) -> Order {
    let cell = |field: OrderField| columns.cell(row, field);

    let id = if let Some(tracking) = cell(OrderField::Tracking) {
        tracking.to_owned()
    } else {
        report.synthetic_ids += 1;
        format!("CMD-{line_no}")
    };

    let date = match match_date(cell(OrderField::Date).unwrap_or_default(), today) {
        DateMatch::Normalized(v) => v,
        DateMatch::Unrecognized(v) => {
            report.dates_unrecognized += 1;
            v
        }
        DateMatch::Defaulted(v) => {
            report.dates_defaulted += 1;
            v
        }
    };

    let wilaya = match match_wilaya(cell(OrderField::Wilaya).unwrap_or_default()) {
        WilayaMatch::Canonical(name) => name.to_owned(),
        WilayaMatch::Fallback(token) => {
            report.wilayas_unmatched += 1;
            token
        }
        WilayaMatch::Missing => {
            report.wilayas_missing += 1;
            UNKNOWN.to_owned()
        }
    };

    let status = match cell(OrderField::Status) {
        Some(label) => classify_status(label).unwrap_or_else(|| {
            report.statuses_unrecognized += 1;
            OrderStatus::Pending
        }),
        None => OrderStatus::Pending,
    };

    Order {
        id,
        date,
        client: cell(OrderField::Client).unwrap_or(UNKNOWN).to_owned(),
        phone: cell(OrderField::Phone).unwrap_or_default().to_owned(),
        wilaya,
        product: cell(OrderField::Product).unwrap_or(UNKNOWN).to_owned(),
        total: cell(OrderField::Price).map_or(0.0, parse_amount),
        status,
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
