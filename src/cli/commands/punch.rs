use crate::cli::commands::open_timelog;
use crate::cli::parser::{BreakAction, Cli, Commands};
use crate::config::Config;
use crate::core::Command;
use crate::errors::AppResult;
use crate::ui::report::print_transition;

/// Handle `in`, `out` and `break start|end`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let command = match &cli.command {
        Commands::In => Command::In,
        Commands::Out => Command::Out,
        Commands::Break {
            action: BreakAction::Start,
        } => Command::BreakStart,
        Commands::Break {
            action: BreakAction::End,
        } => Command::BreakEnd,
        _ => return Ok(()),
    };

    let mut log = open_timelog(cli, cfg)?;
    let transition = log.apply(command)?;
    print_transition(&transition);

    Ok(())
}
