//! The engine: owns the parsed entries, the focus index and the writer.
//!
//! Writes always target the last entry. The focus index only redirects
//! read-only reporting, and any accepted write moves it back to the last entry.

use crate::core::calculator::projection::{
    DEFAULT_WORK_DAY_HOURS, Projection, project, validate_target_hours,
};
use crate::core::calculator::totals::{DayTotals, sealed_totals};
use crate::core::clock::Clock;
use crate::core::logic::Core;
use crate::core::parser::parse_log;
use crate::core::state::{ClockState, Command, Transition};
use crate::core::store::LogStore;
use crate::core::writer::LogWriter;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::entry::{Entry, EntryViolation};
use crate::utils::time::truncate_to_minute;
use chrono::{NaiveDateTime, NaiveTime};
use tracing::{debug, info};

pub struct TimeLog<S: LogStore, C: Clock> {
    entries: Vec<Entry>,
    focus: Option<usize>,
    target_hours: f64,
    writer: LogWriter<S>,
    clock: C,
}

impl<S: LogStore, C: Clock> TimeLog<S, C> {
    /// Parse the store's full content and focus the most recent entry.
    pub fn load(store: S, clock: C) -> AppResult<Self> {
        let entries = parse_log(&store.read_all()?)?;
        let focus = entries.len().checked_sub(1);
        debug!(entries = entries.len(), ?focus, "time log loaded");

        Ok(Self {
            entries,
            focus,
            target_hours: DEFAULT_WORK_DAY_HOURS,
            writer: LogWriter::new(store),
            clock,
        })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn store(&self) -> &S {
        self.writer.store()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn target_hours(&self) -> f64 {
        self.target_hours
    }

    pub fn set_target_hours(&mut self, hours: f64) -> AppResult<()> {
        self.target_hours = validate_target_hours(hours)?;
        Ok(())
    }

    pub fn last_entry(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn focus_entry(&self) -> Option<&Entry> {
        self.focus.and_then(|i| self.entries.get(i))
    }

    /// Redirect reporting to the entry `index_from_head` back from the most
    /// recent one (1 = most recent).
    pub fn focus_on(&mut self, index_from_head: usize) -> AppResult<()> {
        let len = self.entries.len();
        if index_from_head == 0 || index_from_head > len {
            return Err(AppError::InvalidIndex {
                index: index_from_head,
                len,
            });
        }
        self.focus = Some(len - index_from_head);
        Ok(())
    }

    /// State used to gate writes: always the last entry.
    pub fn clock_state(&self) -> ClockState {
        ClockState::of(self.last_entry())
    }

    /// State of the entry under inspection.
    pub fn focus_state(&self) -> ClockState {
        ClockState::of(self.focus_entry())
    }

    pub fn punch_in(&mut self) -> AppResult<Transition> {
        self.apply(Command::In)
    }

    pub fn start_break(&mut self) -> AppResult<Transition> {
        self.apply(Command::BreakStart)
    }

    pub fn end_break(&mut self) -> AppResult<Transition> {
        self.apply(Command::BreakEnd)
    }

    pub fn punch_out(&mut self) -> AppResult<Transition> {
        self.apply(Command::Out)
    }

    /// Gate `command` against the current state and, if allowed, append it to
    /// the log before updating memory. Rejections touch nothing.
    pub fn apply(&mut self, command: Command) -> AppResult<Transition> {
        let state = self.clock_state();
        let Some(next) = state.next(command) else {
            debug!(%state, %command, "command rejected");
            return Ok(Transition::rejected(command, state));
        };

        let at = self.now_minute();
        match command {
            Command::In => {
                self.writer.write_punch_in(at)?;
                self.entries.push(Entry::new(at.date(), at.time()));
            }
            Command::BreakStart => {
                let entry = self.updated_entry(at, Entry::start_break)?;
                self.writer.write_break_in(at.time())?;
                self.replace_last(entry);
            }
            Command::BreakEnd => {
                let entry = self.updated_entry(at, Entry::end_break)?;
                self.writer.write_break_out(at.time())?;
                self.replace_last(entry);
            }
            Command::Out => {
                let entry = self.updated_entry(at, Entry::seal)?;
                self.writer.write_punch_out(&entry)?;
                self.replace_last(entry);
            }
            Command::State => {}
        }

        if command != Command::State {
            self.focus = self.entries.len().checked_sub(1);
        }
        info!(%command, state = %next, "command accepted");

        Ok(Transition::Accepted {
            command,
            state: next,
            at,
        })
    }

    /// Final totals of the focus entry (must be sealed).
    pub fn totals(&self) -> AppResult<DayTotals> {
        sealed_totals(self.focus_entry().ok_or(AppError::NoEntries)?)
    }

    /// Projection for the focus entry (must be open).
    pub fn projection(&self) -> AppResult<Projection> {
        let entry = self.focus_entry().ok_or(AppError::NoEntries)?;
        project(entry, self.clock.now(), self.target_hours)
    }

    /// Totals or projection, whichever fits the focus entry.
    pub fn summary(&self) -> AppResult<DaySummary> {
        let entry = self.focus_entry().ok_or(AppError::NoEntries)?;
        Core::build_daily_summary(entry, self.clock.now(), self.target_hours)
    }

    fn now_minute(&self) -> NaiveDateTime {
        let now = self.clock.now();
        now.date().and_time(truncate_to_minute(now.time()))
    }

    /// Copy of the last entry with `update` applied at `at`. The copy replaces
    /// the stored entry only after the append succeeded.
    fn updated_entry(
        &self,
        at: NaiveDateTime,
        update: fn(&mut Entry, NaiveTime) -> Result<(), EntryViolation>,
    ) -> AppResult<Entry> {
        let mut entry = self
            .entries
            .last()
            .filter(|e| !e.is_sealed())
            .cloned()
            .ok_or_else(|| AppError::IncompleteEntry("no open entry to update".into()))?;

        entry
            .check_span(at)
            .and_then(|_| update(&mut entry, at.time()))
            .map_err(|v| AppError::IncompleteEntry(v.describe().to_string()))?;
        Ok(entry)
    }

    fn replace_last(&mut self, entry: Entry) {
        if let Some(last) = self.entries.last_mut() {
            *last = entry;
        }
    }
}
