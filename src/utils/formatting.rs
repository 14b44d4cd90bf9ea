//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Remaining time label: minutes alone up to an hour, otherwise `{h}H:{m}m`.
///
/// Negative values (overtime) always render as minutes.
pub fn remaining_label(mins: i64) -> String {
    if mins <= 60 {
        format!("{}m", mins)
    } else {
        format!("{}H:{}m", mins / 60, mins % 60)
    }
}

/// Hours with two decimals, as written on `TIME::` lines.
pub fn hours2(h: f64) -> String {
    format!("{:.2}", h)
}
