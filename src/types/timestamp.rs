//! Lenient parsing of the timestamp formats the backend emits.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a backend timestamp into a naive date-time.
///
/// RFC 3339 values keep the wall-clock time of their own offset, so the calendar day
/// is the one written in the string. Date-only values map to midnight.
///
/// ```
/// use airquality::parse_timestamp;
///
/// let a = parse_timestamp("2025-01-06T23:30:00+05:30").unwrap();
/// let b = parse_timestamp("2025-01-06 23:30:00").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(parse_timestamp("2025-01-06").unwrap().to_string(), "2025-01-06 00:00:00");
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    // A trailing 'Z' without a full RFC 3339 shape, e.g. "2025-01-06T13:00Z"
    let raw = raw.strip_suffix('Z').unwrap_or(raw);
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// The `YYYY-MM-DD` key used to line records up against calendar days.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Missing, `null`, or unparseable timestamps deserialize to `None` instead of failing the response.
pub(crate) fn deserialize_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_timestamp(&s),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(epoch_to_datetime)
            .map(|dt| dt.naive_utc()),
        _ => None,
    })
}

pub(crate) fn deserialize_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_timestamp(deserializer)?.map(|dt| dt.date()))
}

// Epoch values above ~year 2286 in seconds are treated as milliseconds.
fn epoch_to_datetime(value: i64) -> Option<DateTime<chrono::Utc>> {
    if value.abs() >= 10_000_000_000 {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}
