//! punch library root.
//! Exposes CLI parser, high-level run() function, and the time log engine.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::In | Commands::Out | Commands::Break { .. } => {
            cli::commands::punch::handle(cli, cfg)
        }
        Commands::State { .. } => cli::commands::state::handle(cli, cfg),
        Commands::List => cli::commands::list::handle(cli, cfg),
        Commands::Show => cli::commands::show::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Test mode never reads the user's configuration
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_log) = &cli.log {
        cfg.log_file = custom_log.clone();
    }

    utils::logging::init_tracing(cli.debug || cfg.debug);
    tracing::debug!(?cfg, "configuration loaded");

    dispatch(&cli, &cfg)
}
