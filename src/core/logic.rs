use crate::core::calculator::{projection, totals};
use crate::errors::AppResult;
use crate::models::{day_summary::DaySummary, entry::Entry};
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    pub fn build_daily_summary(
        entry: &Entry,
        now: NaiveDateTime,
        target_hours: f64,
    ) -> AppResult<DaySummary> {
        if entry.is_sealed() {
            Ok(DaySummary::Sealed(totals::sealed_totals(entry)?))
        } else {
            Ok(DaySummary::Open(projection::project(
                entry,
                now,
                target_hours,
            )?))
        }
    }
}
