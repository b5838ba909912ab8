//! Time-axis tick labels
//!
//! Spans shorter than a day render as `hh:mm`, longer spans as
//! `MM/DD hh:mm`. All fields are zero-padded.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Seconds in one day
pub const DAY_SECS: i64 = 86_400;

const SHORT_FORMAT: &str = "%H:%M";
const LONG_FORMAT: &str = "%m/%d %H:%M";

/// Label formatter for a chart spanning `span_secs` seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeAxis {
    pub span_secs: i64,
}

impl TimeAxis {
    pub fn new(span_secs: i64) -> Self {
        Self { span_secs }
    }

    /// Whether labels include the date
    pub fn shows_date(&self) -> bool {
        self.span_secs >= DAY_SECS
    }

    /// Format a timestamp (seconds since the epoch) in the given time zone.
    /// Timestamps chrono cannot represent yield an empty label.
    pub fn format_tick<Tz>(&self, timestamp: f64, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(utc) = to_datetime(timestamp) else {
            return String::new();
        };
        let pattern = if self.shows_date() {
            LONG_FORMAT
        } else {
            SHORT_FORMAT
        };
        utc.with_timezone(tz).format(pattern).to_string()
    }

    /// Format a timestamp in the local time zone
    pub fn format_tick_local(&self, timestamp: f64) -> String {
        self.format_tick(timestamp, &Local)
    }
}

fn to_datetime(timestamp: f64) -> Option<DateTime<chrono::Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1e9).clamp(0.0, 999_999_999.0) as u32;
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(secs as i64, nanos)
}
