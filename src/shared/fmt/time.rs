//! Timestamp labels for chart axes and the "last updated" line.

use chrono::{DateTime, TimeZone, Utc};

/// Short month and day (`"Oct 19"`) for an epoch-millisecond timestamp, in UTC.
///
/// Out-of-range timestamps render as an empty label.
pub fn format_chart_date(timestamp_ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_default()
}

/// Two-digit 12-hour clock (`"02:05:09 PM"`) in the timestamp's own zone.
pub fn format_clock<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%I:%M:%S %p").to_string()
}
