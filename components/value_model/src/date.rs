//! Date values backed by millisecond timestamps
//!
//! A date value is a single `f64` counting milliseconds since the Unix
//! epoch. NaN encodes an invalid date. The timestamp is the comparison
//! key used by the equality engine.

use chrono::{DateTime, NaiveDate};
use std::fmt;

/// A date value: milliseconds since January 1, 1970 00:00:00 UTC.
///
/// # Examples
///
/// ```
/// use value_model::DateValue;
///
/// let date = DateValue::from_components(2024, 0, Some(15), None, None, None, None);
/// assert!(date.is_valid());
///
/// let same = DateValue::from_timestamp(date.timestamp());
/// assert_eq!(date.timestamp(), same.timestamp());
/// ```
#[derive(Debug, Clone)]
pub struct DateValue {
    /// Internal time value in milliseconds since the epoch; NaN means invalid
    time_value: f64,
}

impl DateValue {
    /// Create a date from milliseconds since the epoch.
    ///
    /// Non-finite inputs produce an invalid date; fractional milliseconds
    /// are truncated.
    pub fn from_timestamp(ms: f64) -> Self {
        let time_value = if ms.is_nan() || ms.is_infinite() {
            f64::NAN
        } else {
            ms.trunc()
        };
        DateValue { time_value }
    }

    /// Create a date from calendar components, interpreted as UTC.
    ///
    /// Month is 0-indexed (0 = January, 11 = December) and years 0-99 map
    /// to 1900-1999. Out-of-range components produce an invalid date.
    pub fn from_components(
        year: i32,
        month: u32,
        day: Option<u32>,
        hours: Option<u32>,
        minutes: Option<u32>,
        seconds: Option<u32>,
        ms: Option<u32>,
    ) -> Self {
        // Two-digit years map into the 1900s
        let actual_year = if (0..=99).contains(&year) {
            1900 + year
        } else {
            year
        };

        let day = day.unwrap_or(1);
        let hours = hours.unwrap_or(0);
        let minutes = minutes.unwrap_or(0);
        let seconds = seconds.unwrap_or(0);
        let ms = ms.unwrap_or(0);

        // Months are 0-indexed here, 1-indexed in chrono
        let result = NaiveDate::from_ymd_opt(actual_year, month + 1, day)
            .and_then(|date| date.and_hms_milli_opt(hours, minutes, seconds, ms));

        match result {
            Some(dt) => DateValue {
                time_value: dt.and_utc().timestamp_millis() as f64,
            },
            None => DateValue::invalid(),
        }
    }

    /// Create an invalid date (NaN time value).
    pub fn invalid() -> Self {
        DateValue {
            time_value: f64::NAN,
        }
    }

    /// Get the internal time value (milliseconds since the epoch).
    pub fn timestamp(&self) -> f64 {
        self.time_value
    }

    /// Check if the date is valid (not NaN).
    pub fn is_valid(&self) -> bool {
        !self.time_value.is_nan()
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Invalid Date");
        }
        let secs = (self.time_value / 1000.0).floor() as i64;
        let nsecs = ((self.time_value.rem_euclid(1000.0)) * 1_000_000.0) as u32;
        match DateTime::from_timestamp(secs, nsecs) {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            None => write!(f, "Invalid Date"),
        }
    }
}
