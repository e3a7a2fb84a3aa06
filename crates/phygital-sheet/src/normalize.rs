//! Value normalizers for dates, wilayas, statuses and amounts.
//!
//! Every normalizer is total: unrecognized input degrades to a documented
//! default instead of failing. The `match_*`/`classify_*` variants expose
//! whether the default was taken so the feed parser can report it.

use std::sync::LazyLock;

use chrono::NaiveDate;
use phygital_core::OrderStatus;
use regex::Regex;

use crate::wilayas::WILAYAS;

/// Fallback for a missing region and for missing free-text fields.
pub const UNKNOWN: &str = "Inconnu";

static DAY_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{4})").expect("valid day-first regex")
});

static YEAR_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})[/-]([0-9]{1,2})[/-]([0-9]{1,2})").expect("valid year-first regex")
});

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Outcome of [`match_date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DateMatch {
    /// Reformatted to `DD/MM/YYYY`.
    Normalized(String),
    /// Not a recognized layout; the cleaned token is passed through.
    Unrecognized(String),
    /// Empty input; today's date was substituted.
    Defaulted(String),
}

impl DateMatch {
    pub(crate) fn into_value(self) -> String {
        match self {
            DateMatch::Normalized(v) | DateMatch::Unrecognized(v) | DateMatch::Defaulted(v) => v,
        }
    }
}

pub(crate) fn match_date(raw: &str, today: NaiveDate) -> DateMatch {
    // Drop any time suffix ("05/03/2024 14:32").
    let Some(clean) = raw.split_whitespace().next() else {
        return DateMatch::Defaulted(today.format("%d/%m/%Y").to_string());
    };

    if let Some(caps) = DAY_FIRST.captures(clean) {
        return DateMatch::Normalized(format!(
            "{:0>2}/{:0>2}/{}",
            &caps[1], &caps[2], &caps[3]
        ));
    }

    if let Some(caps) = YEAR_FIRST.captures(clean) {
        return DateMatch::Normalized(format!(
            "{:0>2}/{:0>2}/{}",
            &caps[3], &caps[2], &caps[1]
        ));
    }

    DateMatch::Unrecognized(clean.to_owned())
}

/// Normalizes a date cell to `DD/MM/YYYY`, using `today` for empty input.
///
/// Day-first (`5/3/2024`, `05-03-2024`) and year-first (`2024-03-05`)
/// layouts are recognized; anything else is returned as its first
/// whitespace-delimited token. Day and month are not range-checked.
#[must_use]
pub fn normalize_date_on(raw: &str, today: NaiveDate) -> String {
    match_date(raw, today).into_value()
}

/// [`normalize_date_on`] with the local calendar date as `today`.
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    normalize_date_on(raw, chrono::Local::now().date_naive())
}

// ---------------------------------------------------------------------------
// Wilayas
// ---------------------------------------------------------------------------

/// Outcome of [`match_wilaya`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WilayaMatch {
    Canonical(&'static str),
    /// No canonical name found; first token of the raw value.
    Fallback(String),
    Missing,
}

impl WilayaMatch {
    pub(crate) fn into_value(self) -> String {
        match self {
            WilayaMatch::Canonical(name) => name.to_owned(),
            WilayaMatch::Fallback(token) => token,
            WilayaMatch::Missing => UNKNOWN.to_owned(),
        }
    }
}

pub(crate) fn match_wilaya(raw: &str) -> WilayaMatch {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return WilayaMatch::Missing;
    }

    let lower = trimmed.to_lowercase();
    if let Some(name) = WILAYAS
        .iter()
        .copied()
        .find(|name| lower.contains(&name.to_lowercase()))
    {
        return WilayaMatch::Canonical(name);
    }

    let token = trimmed
        .split(|c: char| c.is_whitespace() || c == '-' || c == '/')
        .next()
        .unwrap_or(trimmed);
    WilayaMatch::Fallback(token.to_owned())
}

/// Maps a free-text location onto one of the 58 canonical wilaya names.
///
/// The first list entry contained in the input (case-insensitive) wins, so
/// `"Alger Centre"` becomes `"Alger"`. Without a match the first token of the
/// input is returned (split on whitespace, `-` or `/`); empty input yields
/// `"Inconnu"`.
#[must_use]
pub fn normalize_wilaya(raw: &str) -> String {
    match_wilaya(raw).into_value()
}

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// Classifies a courier/spreadsheet status label, `None` when no keyword
/// matches.
///
/// Terminal states are checked first: "Confirmé puis Retourné" is returned.
pub(crate) fn classify_status(raw: &str) -> Option<OrderStatus> {
    let s = raw.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    let is = |exact: &[&str]| exact.contains(&s.as_str());
    let has = |fragments: &[&str]| fragments.iter().any(|f| s.contains(f));

    if is(&["livree", "livrée"]) || has(&["delivered"]) {
        Some(OrderStatus::Delivered)
    } else if is(&["annule", "annulé"]) || has(&["retour", "refus", "returned", "cancelled"]) {
        Some(OrderStatus::Returned)
    } else if is(&["en route"]) || has(&["dispatch", "transit", "shipping", "expédié"]) {
        Some(OrderStatus::Shipping)
    } else if is(&["confirme", "confirmé"]) || has(&["confirmed", "ready"]) {
        Some(OrderStatus::Confirmed)
    } else {
        None
    }
}

/// Classifies a status label into the closed [`OrderStatus`] set, defaulting
/// to [`OrderStatus::Pending`].
#[must_use]
pub fn normalize_status(raw: &str) -> OrderStatus {
    classify_status(raw).unwrap_or(OrderStatus::Pending)
}

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Parses a price cell such as `"2 500 DA"` or `"1500.00"`.
///
/// Everything except ASCII digits and `.` is discarded, then the longest
/// numeric prefix is parsed (`"1.2.3"` → `1.2`). Returns `0.0` when nothing
/// numeric remains.
#[must_use]
pub fn parse_amount(raw: &str) -> f64 {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0usize;
    let mut seen_dot = false;
    for (idx, ch) in digits.char_indices() {
        if ch == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = idx + 1;
    }

    digits[..end].parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
