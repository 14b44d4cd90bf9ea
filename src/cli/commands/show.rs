use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::fs;

/// Print the log file as stored, without parsing it.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let path = cfg.log_path();
    if !path.exists() {
        info(format!("No log file at {}", path.display()));
        return Ok(());
    }

    let content = fs::read_to_string(&path)?;
    println!("{}", content.trim_end());
    Ok(())
}
