//! Reads the log text into ordered entries.
//!
//! Lines are matched by prefix. Anything that is not a known event line, a
//! comment, a blank separator, or a date line is rejected: the parser never
//! guesses and continues.

use crate::core::format::{COMMENT_PREFIX, Marker};
use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::utils::date::parse_log_date;
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static EVENT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<marker>[A-Z]+(?:_[A-Z]+)*)::(?P<value>.*)$").expect("valid event regex")
});

/// The entry being assembled between two blank lines.
#[derive(Default)]
struct Pending {
    date: Option<(NaiveDate, usize, String)>,
    entry: Option<Entry>,
}

impl Pending {
    fn entry_mut(&mut self, line_no: usize, raw: &str, what: &str) -> AppResult<&mut Entry> {
        self.entry
            .as_mut()
            .ok_or_else(|| AppError::malformed(line_no, raw, format!("{what} before punch-in")))
    }

    /// Move the finished entry into `entries`, enforcing that only the last
    /// entry may stay open.
    fn finish(self, entries: &mut Vec<Entry>) -> AppResult<()> {
        let Some((_, date_line, date_raw)) = self.date else {
            return Ok(());
        };
        let entry = self
            .entry
            .ok_or_else(|| AppError::malformed(date_line, &date_raw, "entry has no punch-in"))?;

        if let Some(prev) = entries.last()
            && !prev.is_sealed()
        {
            return Err(AppError::malformed(
                date_line,
                &date_raw,
                format!(
                    "previous entry ({}) was never punched out",
                    prev.date_label()
                ),
            ));
        }

        entries.push(entry);
        Ok(())
    }
}

/// Parse the whole log text.
pub fn parse_log(text: &str) -> AppResult<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut pending = Pending::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            std::mem::take(&mut pending).finish(&mut entries)?;
            continue;
        }

        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        if let Some(caps) = EVENT_LINE.captures(line) {
            let prefix = &caps["marker"];
            let marker = Marker::from_prefix(prefix).ok_or_else(|| {
                AppError::malformed(line_no, raw, format!("unknown prefix `{prefix}`"))
            })?;

            // Totals are recomputed on demand, never trusted from storage
            if marker == Marker::Total {
                continue;
            }

            let value = &caps["value"];
            let at = parse_time(value).ok_or_else(|| {
                AppError::malformed(line_no, raw, format!("invalid time `{value}`"))
            })?;

            match marker {
                Marker::PunchIn => {
                    let Some((date, _, _)) = &pending.date else {
                        return Err(AppError::malformed(line_no, raw, "punch-in before date"));
                    };
                    if pending.entry.is_some() {
                        return Err(AppError::malformed(line_no, raw, "duplicate punch-in"));
                    }
                    pending.entry = Some(Entry::new(*date, at));
                }
                Marker::BreakIn => pending
                    .entry_mut(line_no, raw, "break start")?
                    .start_break(at)
                    .map_err(|v| AppError::malformed(line_no, raw, v.describe()))?,
                Marker::BreakOut => pending
                    .entry_mut(line_no, raw, "break end")?
                    .end_break(at)
                    .map_err(|v| AppError::malformed(line_no, raw, v.describe()))?,
                Marker::PunchOut => pending
                    .entry_mut(line_no, raw, "punch-out")?
                    .seal(at)
                    .map_err(|v| AppError::malformed(line_no, raw, v.describe()))?,
                Marker::Total => {}
            }
            continue;
        }

        let date = parse_log_date(line)
            .ok_or_else(|| AppError::malformed(line_no, raw, "invalid date format"))?;
        if pending.date.is_some() {
            return Err(AppError::malformed(
                line_no,
                raw,
                "second date line without a blank line before it",
            ));
        }
        pending.date = Some((date, line_no, raw.to_string()));
    }

    pending.finish(&mut entries)?;

    debug!(entries = entries.len(), "parsed log");
    Ok(entries)
}
