//! Parsing of free-form date strings found in DSU entries
//!
//! Values without an explicit offset are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatetimeError {
    #[error("empty date string")]
    Empty,

    #[error("unrecognised date format: {0:?}")]
    Unrecognised(String),
}

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M %z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse an arbitrary human or machine date string
pub fn parse_any(raw: &str) -> Result<DateTime<Utc>, DatetimeError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(DatetimeError::Empty);
    }

    if value.bytes().all(|b| b.is_ascii_digit()) {
        return parse_digits(value);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
        }
    }

    Err(DatetimeError::Unrecognised(value.to_string()))
}

/// `YYYYMMDD`, unix seconds or unix milliseconds
fn parse_digits(value: &str) -> Result<DateTime<Utc>, DatetimeError> {
    let unrecognised = || DatetimeError::Unrecognised(value.to_string());
    match value.len() {
        8 => NaiveDate::parse_from_str(value, "%Y%m%d")
            .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
            .map_err(|_| unrecognised()),
        9 | 10 => {
            let secs: i64 = value.parse().map_err(|_| unrecognised())?;
            DateTime::from_timestamp(secs, 0).ok_or_else(unrecognised)
        }
        13 => {
            let millis: i64 = value.parse().map_err(|_| unrecognised())?;
            DateTime::from_timestamp_millis(millis).ok_or_else(unrecognised)
        }
        _ => Err(unrecognised()),
    }
}
