//! Punch/break state, derived from an entry on every call and never stored.

use crate::models::entry::Entry;
use chrono::NaiveDateTime;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakState {
    OnBreak,
    OffBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    PunchedOut,
    PunchedIn(BreakState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    In,
    Out,
    BreakStart,
    BreakEnd,
    State,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::In,
        Command::Out,
        Command::BreakStart,
        Command::BreakEnd,
        Command::State,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::In => "in",
            Command::Out => "out",
            Command::BreakStart => "break start",
            Command::BreakEnd => "break end",
            Command::State => "state",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ClockState {
    /// Punched out when there is no entry or it is sealed; on break when the
    /// last break pair has no end.
    pub fn of(entry: Option<&Entry>) -> Self {
        match entry {
            Some(e) if !e.is_sealed() => {
                if e.open_break().is_some() {
                    ClockState::PunchedIn(BreakState::OnBreak)
                } else {
                    ClockState::PunchedIn(BreakState::OffBreak)
                }
            }
            _ => ClockState::PunchedOut,
        }
    }

    /// State after `cmd`, or `None` when `cmd` is not allowed now.
    pub fn next(self, cmd: Command) -> Option<ClockState> {
        use BreakState::*;
        use ClockState::*;

        match (self, cmd) {
            (_, Command::State) => Some(self),
            (PunchedOut, Command::In) => Some(PunchedIn(OffBreak)),
            (PunchedIn(OffBreak), Command::BreakStart) => Some(PunchedIn(OnBreak)),
            (PunchedIn(OnBreak), Command::BreakEnd) => Some(PunchedIn(OffBreak)),
            (PunchedIn(OffBreak), Command::Out) => Some(PunchedOut),
            _ => None,
        }
    }

    pub fn accepts(self, cmd: Command) -> bool {
        self.next(cmd).is_some()
    }

    pub fn available_commands(self) -> Vec<Command> {
        Command::ALL
            .into_iter()
            .filter(|c| self.accepts(*c))
            .collect()
    }

    pub fn is_punched_in(self) -> bool {
        matches!(self, ClockState::PunchedIn(_))
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockState::PunchedOut => f.write_str("punched out"),
            ClockState::PunchedIn(BreakState::OffBreak) => f.write_str("punched in: off break"),
            ClockState::PunchedIn(BreakState::OnBreak) => f.write_str("punched in: on break"),
        }
    }
}

/// Outcome of a write command. A rejection is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Accepted {
        command: Command,
        state: ClockState,
        at: NaiveDateTime,
    },
    Rejected {
        command: Command,
        state: ClockState,
        available: Vec<Command>,
    },
}

impl Transition {
    pub fn rejected(command: Command, state: ClockState) -> Self {
        Transition::Rejected {
            command,
            state,
            available: state.available_commands(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Transition::Accepted { .. })
    }

    pub fn state(&self) -> ClockState {
        match self {
            Transition::Accepted { state, .. } | Transition::Rejected { state, .. } => *state,
        }
    }
}
