use crate::cli::commands::open_timelog;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::Clock;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::ui::messages::info;
use crate::utils::formatting::{bold, hours2};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let log = open_timelog(cli, cfg)?;

    if log.entries().is_empty() {
        info("No entries recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("Date", 18),
        Column::new("In", 6),
        Column::new("Out", 6),
        Column::new("Breaks", 7),
        Column::new("Hours", 10),
    ]);

    let now = log.clock().now();
    let len = log.entries().len();
    let mut total = 0.0;

    for (i, entry) in log.entries().iter().enumerate() {
        let summary = Core::build_daily_summary(entry, now, log.target_hours())?;
        let hours = match summary {
            DaySummary::Sealed(t) => {
                total += t.net_hours();
                hours2(t.net_hours())
            }
            DaySummary::Open(p) => format!("{} (open)", hours2(p.hours_so_far())),
        };

        table.add_row(vec![
            (len - i).to_string(),
            entry.date_label(),
            format_time(entry.punch_in()),
            entry
                .punch_out()
                .map(format_time)
                .unwrap_or_else(|| "--:--".to_string()),
            format!("{}m", summary.break_minutes()),
            hours,
        ]);
    }

    println!("{}", bold("Recorded entries:"));
    print!("{}", table.render());
    println!("\nCompleted total: {}H", hours2(total));

    Ok(())
}
