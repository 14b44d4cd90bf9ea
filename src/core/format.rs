//! Line grammar shared by the parser and the writer.
//!
//! ```text
//! Jan 05, 2024
//!   P_IN::09:00
//!   B_IN::12:00
//!   B_OUT::12:30
//!   P_OUT::17:30
//!   TIME::8.00H
//! ```

use chrono::NaiveTime;

use crate::utils::formatting::hours2;
use crate::utils::time::format_time;

pub const INDENT: &str = "  ";
pub const COMMENT_PREFIX: char = '#';
pub const SEPARATOR: &str = "::";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    PunchIn,
    BreakIn,
    BreakOut,
    PunchOut,
    Total,
}

impl Marker {
    pub fn from_prefix(s: &str) -> Option<Self> {
        match s {
            "P_IN" => Some(Marker::PunchIn),
            "B_IN" => Some(Marker::BreakIn),
            "B_OUT" => Some(Marker::BreakOut),
            "P_OUT" => Some(Marker::PunchOut),
            "TIME" => Some(Marker::Total),
            _ => None,
        }
    }

    pub fn as_prefix(&self) -> &'static str {
        match self {
            Marker::PunchIn => "P_IN",
            Marker::BreakIn => "B_IN",
            Marker::BreakOut => "B_OUT",
            Marker::PunchOut => "P_OUT",
            Marker::Total => "TIME",
        }
    }

    /// `  P_IN::09:00\n`
    pub fn time_line(&self, t: NaiveTime) -> String {
        format!("{INDENT}{}{SEPARATOR}{}\n", self.as_prefix(), format_time(t))
    }
}

/// `  TIME::8.00H\n`
pub fn total_line(net_hours: f64) -> String {
    format!(
        "{INDENT}{}{SEPARATOR}{}H\n",
        Marker::Total.as_prefix(),
        hours2(net_hours)
    )
}
