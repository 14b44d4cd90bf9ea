//! Appends one event at a time, in the exact shape the parser reads back.

use crate::core::calculator::totals::sealed_totals;
use crate::core::format::{Marker, total_line};
use crate::core::store::LogStore;
use crate::errors::AppResult;
use crate::models::entry::Entry;
use crate::utils::date::format_log_date;
use chrono::{NaiveDateTime, NaiveTime};
use tracing::debug;

pub struct LogWriter<S: LogStore> {
    store: S,
}

impl<S: LogStore> LogWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Blank separator, date line, `P_IN`.
    pub fn write_punch_in(&mut self, at: NaiveDateTime) -> AppResult<()> {
        let text = format!(
            "\n{}\n{}",
            format_log_date(at.date()),
            Marker::PunchIn.time_line(at.time())
        );
        self.append(&text)
    }

    pub fn write_break_in(&mut self, at: NaiveTime) -> AppResult<()> {
        self.append(&Marker::BreakIn.time_line(at))
    }

    pub fn write_break_out(&mut self, at: NaiveTime) -> AppResult<()> {
        self.append(&Marker::BreakOut.time_line(at))
    }

    /// `P_OUT` followed by the net total of the freshly sealed entry.
    pub fn write_punch_out(&mut self, sealed: &Entry) -> AppResult<()> {
        let totals = sealed_totals(sealed)?;
        let mut text = String::new();
        if let Some(out) = sealed.punch_out() {
            text.push_str(&Marker::PunchOut.time_line(out));
        }
        text.push_str(&total_line(totals.net_hours()));
        self.append(&text)
    }

    /// Append `text`, first closing an unterminated last line (hand-edited
    /// logs may lack the final newline).
    fn append(&mut self, text: &str) -> AppResult<()> {
        debug!(text = text.trim_end(), "append to log");
        if !text.is_empty() && !self.store.at_line_start()? {
            return self.store.append(&format!("\n{text}"));
        }
        self.store.append(text)
    }
}
