use chrono::{NaiveDate, NaiveDateTime};

/// Sentinel shown wherever source data for a slot is absent.
pub const PLACEHOLDER: &str = "--";

/// Parses forecast timestamps. The API sends minute precision; seconds are
/// tolerated so fixtures copied from other sources still parse.
#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Formats a measurement with its unit, or the placeholder when absent.
/// Zero is a real reading and is never replaced.
#[must_use]
pub fn format_measure(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{unit}", format_number(v)),
        None => format!("{PLACEHOLDER}{unit}"),
    }
}

/// Like [`format_measure`] but the whole cell collapses to the placeholder.
#[must_use]
pub fn format_measure_or_placeholder(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(
        || PLACEHOLDER.to_string(),
        |v| format!("{}{unit}", format_number(v)),
    )
}

/// Prints the value the way the API reported it: integers without a
/// fraction, everything else unrounded.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
