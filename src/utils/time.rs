//! Time utilities: parsing HH:MM, minute arithmetic, 12-hour rendering.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Format used for times inside the log file.
pub const LOG_TIME_FORMAT: &str = "%H:%M";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), LOG_TIME_FORMAT).ok()
}

pub fn format_time(t: NaiveTime) -> String {
    t.format(LOG_TIME_FORMAT).to_string()
}

/// `13:05` → `01:05PM`
pub fn to_12h(t: NaiveTime) -> String {
    t.format("%I:%M%p").to_string()
}

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes from `start` forward to `end` on a clock face. An `end` earlier
/// than `start` is read as the next day, so the result is always in
/// `0..MINUTES_PER_DAY`.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes().rem_euclid(MINUTES_PER_DAY)
}

pub fn minutes_between_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// Drop seconds and sub-second precision, as the log only stores HH:MM.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}
