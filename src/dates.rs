//! Parsed views over the raw date text stored in a record.
//!
//! Extraction keeps dates exactly as printed. These helpers only interpret
//! them on demand, so an unexpected format degrades to `None`.

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a patent page date such as `2014-09-16`.
///
/// Accepts a bare ISO date, an ISO date-time (the date part is kept), and
/// surrounding whitespace. Anything else yields `None`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|dt| dt.date())
        .ok()
}
