//! Field parsing utilities for report records
//!
//! Every function here is total: text that cannot be coerced yields `None`
//! (or the cleaned text itself) rather than an error.

use crate::constants::{FIELD_DELIMITER, NOT_SAMPLED_MARKER, QUOTE_CHAR, REPORT_DATE_LEN};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// First unsigned decimal number in a text
static FIRST_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("valid intensity pattern"));

/// Trim a raw value and drop every quote character
pub fn clean_value(raw: &str) -> String {
    raw.trim().replace(QUOTE_CHAR, "")
}

/// Split one line on the field delimiter and clean each value
///
/// Delimiters inside quoted values are not special: such a value splits and
/// shifts the remaining columns of the row.
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(clean_value).collect()
}

/// Parse a `YYYYMMDD` token into a calendar date
///
/// Anything that is not exactly eight ASCII digits forming a real date is
/// absent.
pub fn parse_report_date(value: &str) -> Option<NaiveDate> {
    if value.len() != REPORT_DATE_LEN || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = value[0..4].parse().ok()?;
    let month: u32 = value[4..6].parse().ok()?;
    let day: u32 = value[6..8].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a coordinate in decimal degrees
pub fn parse_coordinate(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a quality level
pub fn parse_quality_level(value: &str) -> Option<i32> {
    value.parse::<i32>().ok()
}

/// Normalize a verification token to upper case
pub fn normalize_verification(value: &str) -> String {
    value.to_uppercase()
}

/// Extract the first number from a free-text intensity description
///
/// Handles texts such as `"2 - 4"`, `"~1.5"`, `">5"`, `"F1"` or `"90 km/h"`.
/// Empty text and the not-sampled marker are absent without scanning.
pub fn extract_intensity(value: &str) -> Option<f64> {
    if value.is_empty() || value == NOT_SAMPLED_MARKER {
        return None;
    }

    FIRST_NUMBER
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}
