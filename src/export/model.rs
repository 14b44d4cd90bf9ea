// src/export/model.rs

use crate::core::calculator::totals::DayTotals;
use crate::models::entry::Entry;
use crate::utils::time::format_time;
use serde::Serialize;

/// Flat row for one sealed entry, as kept in the tabular variant of the log.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Punch in")]
    pub punch_in: String,
    #[serde(rename = "Punch out")]
    pub punch_out: String,
    #[serde(rename = "Breaks (minutes)")]
    pub break_minutes: i64,
    #[serde(rename = "Time (hours)")]
    pub hours: f64,
}

impl EntryExport {
    /// `None` for an entry that is still open.
    pub fn from_entry(entry: &Entry, totals: &DayTotals) -> Option<Self> {
        let punch_out = entry.punch_out()?;
        Some(Self {
            date: entry.date().format("%Y-%m-%d").to_string(),
            punch_in: format_time(entry.punch_in()),
            punch_out: format_time(punch_out),
            break_minutes: totals.break_minutes,
            hours: (totals.net_hours() * 100.0).round() / 100.0,
        })
    }
}
