use crate::errors::{AppError, AppResult};
use crate::models::entry::{Break, Entry};
use crate::utils::time::minutes_between;

/// Accounting for a sealed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTotals {
    pub elapsed_minutes: i64,
    pub break_minutes: i64,
}

impl DayTotals {
    pub fn elapsed_hours(&self) -> f64 {
        self.elapsed_minutes as f64 / 60.0
    }

    pub fn net_minutes(&self) -> i64 {
        self.elapsed_minutes - self.break_minutes
    }

    pub fn net_hours(&self) -> f64 {
        self.net_minutes() as f64 / 60.0
    }
}

pub fn break_minutes(breaks: &[Break]) -> i64 {
    breaks
        .iter()
        .map(|b| minutes_between(b.start, b.end))
        .sum()
}

/// Elapsed and break minutes between punch-in and punch-out.
///
/// A punch-out earlier on the clock than the punch-in is a shift that
/// crossed midnight.
pub fn sealed_totals(entry: &Entry) -> AppResult<DayTotals> {
    let punch_out = entry.punch_out().ok_or_else(|| {
        AppError::IncompleteEntry(format!(
            "{} has no punch-out, totals need a sealed entry",
            entry.date_label()
        ))
    })?;

    Ok(DayTotals {
        elapsed_minutes: minutes_between(entry.punch_in(), punch_out),
        break_minutes: break_minutes(entry.breaks()),
    })
}
