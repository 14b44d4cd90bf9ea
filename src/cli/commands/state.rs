use crate::cli::commands::open_timelog;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::report::{print_entry, print_state, print_summary};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::State { index, hours } = &cli.command {
        let mut log = open_timelog(cli, cfg)?;

        if let Some(i) = index {
            log.focus_on(*i)?;
        }
        if let Some(h) = hours {
            log.set_target_hours(*h)?;
        }

        print_state(log.focus_state());

        let Some(entry) = log.focus_entry() else {
            info("No entries recorded yet. Try 'punch in'.");
            return Ok(());
        };
        print_entry(entry);
        print_summary(&log.summary()?);
    }

    Ok(())
}
