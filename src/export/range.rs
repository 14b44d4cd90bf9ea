// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

fn bad(msg: &str) -> AppError {
    AppError::Export(format!("invalid --range: {msg}"))
}

/// First and last day covered by one side of a range.
fn bounds(part: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match part.len() {
        // YYYY
        4 => {
            let y: i32 = part.parse().map_err(|_| bad("invalid year"))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid year"))?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid year"))?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{part}-01"), "%Y-%m-%d")
                .map_err(|_| bad("invalid month"))?;
            let next_month = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            };
            let last = next_month
                .and_then(|d| d.pred_opt())
                .ok_or_else(|| bad("invalid month"))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(part, "%Y-%m-%d").map_err(|_| bad("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(bad("unsupported format")),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(bad("start and end must have same format"));
        }

        let (first, _) = bounds(start)?;
        let (_, last) = bounds(end)?;
        if first > last {
            return Err(bad("start is after end"));
        }
        Ok((first, last))
    } else {
        bounds(r.trim())
    }
}
