//! Time utilities: parsing HH:MM:SS, injectable timestamps, the wall clock.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S").ok()
}

/// Parse an explicit instant passed on the command line (`--at`).
/// Accepts `YYYY-MM-DDTHH:MM:SS` and the space-separated variant.
pub fn parse_instant(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| AppError::InvalidInstant(s.to_string()))
}

/// Local wall clock, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
