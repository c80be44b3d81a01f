//! Date parsing for feed generation.
//!
//! Article dates are free-form strings (often empty). This module turns
//! the formats we actually see in content into RFC 2822 for rss.

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a date string and format it as RFC 2822.
///
/// Accepted inputs: RFC 3339 (`2024-01-15T10:00:00Z`) and plain dates
/// (`2024-01-15`, treated as midnight UTC). Anything else, including the
/// empty string, yields `None`.
pub fn to_rfc2822(date: &str) -> Option<String> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.with_timezone(&Utc).to_rfc2822());
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().to_rfc2822())
}
