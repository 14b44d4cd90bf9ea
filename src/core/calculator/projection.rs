use crate::core::calculator::totals::break_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::formatting::remaining_label;
use crate::utils::time::{minutes_between_datetimes, to_12h};
use chrono::{Duration, NaiveDateTime};

pub const DEFAULT_WORK_DAY_HOURS: f64 = 8.0;
pub const MIN_WORK_DAY_HOURS: f64 = 1.0;
pub const MAX_WORK_DAY_HOURS: f64 = 24.0;

/// Progress of an open entry towards the target hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub target_hours: f64,
    pub elapsed_minutes: i64,
    pub break_minutes: i64,
    pub remaining_minutes: i64,
    pub finish_at: NaiveDateTime,
    pub on_break: bool,
}

impl Projection {
    pub fn worked_minutes(&self) -> i64 {
        self.elapsed_minutes - self.break_minutes
    }

    pub fn hours_so_far(&self) -> f64 {
        self.worked_minutes() as f64 / 60.0
    }

    /// `45m` or `4H:0m`
    pub fn remaining_label(&self) -> String {
        remaining_label(self.remaining_minutes)
    }

    /// Clock time at which the target is reached, e.g. `05:30PM`.
    pub fn finish_label(&self) -> String {
        to_12h(self.finish_at.time())
    }
}

pub fn validate_target_hours(hours: f64) -> AppResult<f64> {
    if (MIN_WORK_DAY_HOURS..=MAX_WORK_DAY_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(AppError::InvalidHours(hours))
    }
}

/// Project when an open entry reaches `target_hours` of net work.
///
/// A break still in progress counts up to `now`. Event times are placed on
/// the punch-in day or, past midnight, the day after.
pub fn project(entry: &Entry, now: NaiveDateTime, target_hours: f64) -> AppResult<Projection> {
    let target_hours = validate_target_hours(target_hours)?;
    if entry.is_sealed() {
        return Err(AppError::IncompleteEntry(format!(
            "{} is already punched out, nothing left to project",
            entry.date_label()
        )));
    }

    let elapsed = minutes_between_datetimes(entry.punched_in_at(), now);

    let mut breaks = break_minutes(entry.breaks());
    if let Some(start) = entry.open_break() {
        breaks += minutes_between_datetimes(entry.datetime_of(start), now);
    }

    let target_minutes = (target_hours * 60.0).trunc() as i64;
    let remaining = target_minutes - (elapsed - breaks);

    Ok(Projection {
        target_hours,
        elapsed_minutes: elapsed,
        break_minutes: breaks,
        remaining_minutes: remaining,
        finish_at: now + Duration::minutes(remaining),
        on_break: entry.open_break().is_some(),
    })
}
