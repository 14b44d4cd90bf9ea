use chrono::{NaiveDate, NaiveDateTime};

/// Format used for date lines inside the log file, e.g. `Jan 05, 2024`.
pub const LOG_DATE_FORMAT: &str = "%b %d, %Y";

pub fn parse_log_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), LOG_DATE_FORMAT).ok()
}

pub fn format_log_date(d: NaiveDate) -> String {
    d.format(LOG_DATE_FORMAT).to_string()
}

pub fn format_with_weekday(d: NaiveDate) -> String {
    d.format("%a. %b %d, %Y").to_string()
}

/// Parse the `--now` override: `YYYY-MM-DD HH:MM`.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M").ok()
}
