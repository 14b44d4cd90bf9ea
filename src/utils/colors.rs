//! Color choices for event times and hour totals.

use crate::utils::formatting::hours2;
use ansi_term::{ANSIString, Colour};

/// Inbound times (punch in, break end) green, outbound red, placeholders grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    let colour = if value.trim().is_empty() || value.trim() == "--:--" {
        Colour::Fixed(8)
    } else if is_in {
        Colour::Green
    } else {
        Colour::Red
    };
    colour.paint(value).to_string()
}

/// Net hours: green once the target is reached, yellow below it.
pub fn color_for_hours(hours: f64, target: f64) -> Colour {
    if hours >= target {
        Colour::Green
    } else {
        Colour::Yellow
    }
}

/// `hours` rendered as `X.XXH` in its target color.
pub fn paint_hours(hours: f64, target: f64) -> ANSIString<'static> {
    color_for_hours(hours, target).paint(format!("{}H", hours2(hours)))
}
