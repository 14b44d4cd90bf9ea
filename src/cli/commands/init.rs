use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty log file, if none exists yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("Initializing punch…");
    let cfg = Config::init_all(cli.log.clone(), cli.test)?;
    println!("Ready: {} hour work day, log at {}", cfg.work_day_hours, cfg.log_file);
    Ok(())
}
