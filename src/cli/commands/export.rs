use crate::cli::commands::open_timelog;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = &cli.command
    {
        let log = open_timelog(cli, cfg)?;
        ExportLogic::export(log.entries(), *format, file, range, *force)?;
    }

    Ok(())
}
