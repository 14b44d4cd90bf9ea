//! Console rendering of states, entries and totals.

use crate::core::state::{ClockState, Command, Transition};
use crate::models::day_summary::DaySummary;
use crate::models::entry::Entry;
use crate::ui::messages::event;
use crate::utils::colors::{colorize_in_out, paint_hours};
use crate::utils::date::format_log_date;
use crate::utils::formatting::hours2;
use crate::utils::time::format_time;

pub fn command_list(commands: &[Command]) -> String {
    let names: Vec<&str> = commands.iter().map(|c| c.name()).collect();
    format!("[{}]", names.join(", "))
}

pub fn print_state(state: ClockState) {
    println!("\nCurrent state of TimeLog is {}.", state);
    println!(
        "Available commands are: {}\n",
        command_list(&state.available_commands())
    );
}

pub fn print_transition(transition: &Transition) {
    match transition {
        Transition::Accepted { command, at, .. } => {
            let label = match command {
                Command::In => "PUNCH IN",
                Command::Out => "PUNCH OUT",
                Command::BreakStart => "BREAK START",
                Command::BreakEnd => "BREAK END",
                Command::State => "STATE",
            };
            event(format!(
                "{} AT {}, {}",
                label,
                format_time(at.time()),
                format_log_date(at.date())
            ));
        }
        Transition::Rejected { state, .. } => print_state(*state),
    }
}

pub fn print_entry(entry: &Entry) {
    println!("Time entries from last clock event:");
    println!("  {}", entry.date_label());
    for (label, time) in entry.event_lines() {
        let is_in = matches!(label, "Punch In" | "Break End");
        println!("  {}:\t{}", label, colorize_in_out(&time, is_in));
    }
    println!();
}

pub fn print_summary(summary: &DaySummary) {
    match summary {
        DaySummary::Sealed(t) => {
            println!(
                "Total ({}H) - breaks ({}m) = {}H\n",
                hours2(t.elapsed_hours()),
                t.break_minutes,
                hours2(t.net_hours())
            );
        }
        DaySummary::Open(p) => {
            println!(
                "Total so far is {}. {} remaining.",
                paint_hours(p.hours_so_far(), p.target_hours),
                p.remaining_label()
            );
            if p.on_break {
                println!(
                    "End your break and punch out at {} to achieve {} hours today.\n",
                    p.finish_label(),
                    p.target_hours
                );
            } else {
                println!(
                    "Punch out at {} to achieve {} hours today.\n",
                    p.finish_label(),
                    p.target_hours
                );
            }
        }
    }
}
