//! Due Dates
//!
//! Calendar dates travel as `YYYY-MM-DD`. Some backends store them as full
//! timestamps, so decoding also accepts RFC 3339 and keeps the date part.

use chrono::{DateTime, NaiveDate};
use serde::de::{self, Deserialize, Deserializer};

/// Human-readable due date, e.g. `Mar 5, 2025`
pub fn format_due(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

pub(crate) fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_calendar_date(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid calendar date: {value}"))),
    }
}
