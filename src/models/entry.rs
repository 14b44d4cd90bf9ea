use crate::utils::date::format_with_weekday;
use crate::utils::time::{MINUTES_PER_DAY, minutes_between, minutes_between_datetimes, to_12h};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// A completed break inside a work day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Break {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Whether an entry can still receive events.
///
/// An open entry may have one break in progress; a sealed entry never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Open { break_start: Option<NaiveTime> },
    Sealed { punch_out: NaiveTime },
}

/// One work day: date and punch-in are fixed when the entry is created,
/// breaks accumulate while it is open, punch-out seals it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    date: NaiveDate,
    punch_in: NaiveTime,
    breaks: Vec<Break>,
    status: EntryStatus,
}

/// Reasons an event cannot be applied to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryViolation {
    Sealed,
    BreakAlreadyOpen,
    NoOpenBreak,
    OutOfOrder,
    OutsideShift,
}

impl EntryViolation {
    pub fn describe(&self) -> &'static str {
        match self {
            EntryViolation::Sealed => "entry is already punched out",
            EntryViolation::BreakAlreadyOpen => "previous break is still open",
            EntryViolation::NoOpenBreak => "no open break to end",
            EntryViolation::OutOfOrder => "time is earlier than the previous event",
            EntryViolation::OutsideShift => "time is not within 24 hours after punch-in",
        }
    }
}

impl Entry {
    pub fn new(date: NaiveDate, punch_in: NaiveTime) -> Self {
        Self {
            date,
            punch_in,
            breaks: Vec::new(),
            status: EntryStatus::Open { break_start: None },
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn punch_in(&self) -> NaiveTime {
        self.punch_in
    }

    pub fn breaks(&self) -> &[Break] {
        &self.breaks
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub fn punch_out(&self) -> Option<NaiveTime> {
        match self.status {
            EntryStatus::Sealed { punch_out } => Some(punch_out),
            EntryStatus::Open { .. } => None,
        }
    }

    pub fn is_sealed(&self) -> bool {
        matches!(self.status, EntryStatus::Sealed { .. })
    }

    pub fn punched_in_at(&self) -> NaiveDateTime {
        self.date.and_time(self.punch_in)
    }

    /// Minutes from punch-in to `at`, rolling over midnight at most once.
    pub fn offset_of(&self, at: NaiveTime) -> i64 {
        minutes_between(self.punch_in, at)
    }

    /// Full date and time of a clock time recorded in this entry.
    pub fn datetime_of(&self, at: NaiveTime) -> NaiveDateTime {
        self.punched_in_at() + Duration::minutes(self.offset_of(at))
    }

    /// Offset of the latest event recorded so far.
    fn last_offset(&self) -> i64 {
        let last = match self.status {
            EntryStatus::Sealed { punch_out } => Some(punch_out),
            EntryStatus::Open { break_start } => {
                break_start.or_else(|| self.breaks.last().map(|b| b.end))
            }
        };
        last.map_or(0, |t| self.offset_of(t))
    }

    fn ensure_not_before_last(&self, at: NaiveTime) -> Result<(), EntryViolation> {
        if self.offset_of(at) < self.last_offset() {
            Err(EntryViolation::OutOfOrder)
        } else {
            Ok(())
        }
    }

    /// `at` must fall in the 24 hours that start at punch-in.
    pub fn check_span(&self, at: NaiveDateTime) -> Result<(), EntryViolation> {
        let since_in = minutes_between_datetimes(self.punched_in_at(), at);
        if (0..MINUTES_PER_DAY).contains(&since_in) {
            Ok(())
        } else {
            Err(EntryViolation::OutsideShift)
        }
    }

    /// Start of the break in progress, if any.
    pub fn open_break(&self) -> Option<NaiveTime> {
        match self.status {
            EntryStatus::Open { break_start } => break_start,
            EntryStatus::Sealed { .. } => None,
        }
    }

    /// All break pairs in order, the last one possibly without an end.
    pub fn break_pairs(&self) -> Vec<(NaiveTime, Option<NaiveTime>)> {
        let mut pairs: Vec<_> = self.breaks.iter().map(|b| (b.start, Some(b.end))).collect();
        if let Some(start) = self.open_break() {
            pairs.push((start, None));
        }
        pairs
    }

    pub fn start_break(&mut self, at: NaiveTime) -> Result<(), EntryViolation> {
        match self.status {
            EntryStatus::Sealed { .. } => Err(EntryViolation::Sealed),
            EntryStatus::Open {
                break_start: Some(_),
            } => Err(EntryViolation::BreakAlreadyOpen),
            EntryStatus::Open { break_start: None } => {
                self.ensure_not_before_last(at)?;
                self.status = EntryStatus::Open {
                    break_start: Some(at),
                };
                Ok(())
            }
        }
    }

    pub fn end_break(&mut self, at: NaiveTime) -> Result<(), EntryViolation> {
        match self.status {
            EntryStatus::Sealed { .. } => Err(EntryViolation::Sealed),
            EntryStatus::Open { break_start: None } => Err(EntryViolation::NoOpenBreak),
            EntryStatus::Open {
                break_start: Some(start),
            } => {
                self.ensure_not_before_last(at)?;
                self.breaks.push(Break { start, end: at });
                self.status = EntryStatus::Open { break_start: None };
                Ok(())
            }
        }
    }

    pub fn seal(&mut self, at: NaiveTime) -> Result<(), EntryViolation> {
        match self.status {
            EntryStatus::Sealed { .. } => Err(EntryViolation::Sealed),
            EntryStatus::Open {
                break_start: Some(_),
            } => Err(EntryViolation::BreakAlreadyOpen),
            EntryStatus::Open { break_start: None } => {
                self.ensure_not_before_last(at)?;
                self.status = EntryStatus::Sealed { punch_out: at };
                Ok(())
            }
        }
    }

    /// Date rendered with its weekday, e.g. `Fri. Jan 05, 2024`.
    pub fn date_label(&self) -> String {
        format_with_weekday(self.date)
    }

    /// Event lines for display, times in 12-hour format.
    pub fn event_lines(&self) -> Vec<(&'static str, String)> {
        let mut lines = vec![("Punch In", to_12h(self.punch_in))];
        for (start, end) in self.break_pairs() {
            lines.push(("Break Start", to_12h(start)));
            if let Some(end) = end {
                lines.push(("Break End", to_12h(end)));
            }
        }
        if let Some(out) = self.punch_out() {
            lines.push(("Punch Out", to_12h(out)));
        }
        lines
    }
}
