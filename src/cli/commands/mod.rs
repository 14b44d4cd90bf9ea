pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod punch;
pub mod show;
pub mod state;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{AnyClock, FileStore, TimeLog};
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_datetime;
use crate::utils::path::ensure_file;
use chrono::NaiveDateTime;

pub(crate) fn clock_override(cli: &Cli) -> AppResult<Option<NaiveDateTime>> {
    cli.now
        .as_deref()
        .map(|s| parse_datetime(s).ok_or_else(|| AppError::InvalidDateTime(s.to_string())))
        .transpose()
}

/// Locate (or create) the log file and load it.
pub(crate) fn open_timelog(cli: &Cli, cfg: &Config) -> AppResult<TimeLog<FileStore, AnyClock>> {
    let path = cfg.log_path();
    ensure_file(&path)?;

    let clock = AnyClock::from_override(clock_override(cli)?);
    let mut log = TimeLog::load(FileStore::new(path), clock)?;
    log.set_target_hours(cfg.work_day_hours)?;
    Ok(log)
}
