// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date parsing and formatting.
//!
//! Dates are stored as epoch milliseconds and rendered as calendar-date
//! strings such as `Mon Jan 01 2024`. All conversions are in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Rendering used for any date that is missing or out of range.
pub const INVALID_DATE: &str = "Invalid Date";

/// Calendar-date format used in API responses.
const DATE_STRING_FORMAT: &str = "%a %b %d %Y";

/// Zone-less date-time layouts, read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Date-only layouts, resolved to UTC midnight.
const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    DATE_STRING_FORMAT,
    "%b %d %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%Y/%m/%d",
    "%m/%d/%Y",
];

/// Current time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse a loosely formatted date string into epoch milliseconds.
///
/// Returns `None` for anything that is not recognisable as a date. Callers
/// treat that as "no value" rather than an error.
pub fn parse_date_millis(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    for format in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return midnight_millis(date);
        }
    }

    parse_partial_date(raw).and_then(midnight_millis)
}

/// Render epoch milliseconds as a calendar-date string.
///
/// Absent or unrepresentable values render as [`INVALID_DATE`].
pub fn format_date_string(millis: Option<i64>) -> String {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.format(DATE_STRING_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn midnight_millis(date: NaiveDate) -> Option<i64> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// `YYYY` or `YYYY-MM`, resolved to the first day of the period.
fn parse_partial_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.splitn(2, '-');
    let year = parts.next()?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;

    let month = match parts.next() {
        None => 1,
        Some(month) if month.len() == 2 && month.bytes().all(|b| b.is_ascii_digit()) => {
            month.parse().ok()?
        }
        Some(_) => return None,
    };

    NaiveDate::from_ymd_opt(year, month, 1)
}
