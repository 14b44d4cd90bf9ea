use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for punch
#[derive(Parser)]
#[command(
    name = "punch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch in and out, track breaks and see how long until the work day is done",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path
    #[arg(global = true, long = "log", value_name = "FILE")]
    pub log: Option<String>,

    /// Run with debug messages
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    /// Pretend the current time is "YYYY-MM-DD HH:MM"
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BreakAction {
    /// Record break start time
    Start,
    /// Record break end time
    End,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration and an empty log file
    Init,

    /// Record punch-in time
    In,

    /// Start or stop a break
    Break {
        #[arg(value_enum)]
        action: BreakAction,
    },

    /// Record punch-out time
    Out,

    /// Output the current state of the time log
    State {
        #[arg(
            long = "index",
            help = "Entry to inspect, counted back from the most recent (default 1)"
        )]
        index: Option<usize>,

        #[arg(long = "hours", help = "How long the work day is (default 8)")]
        hours: Option<f64>,
    },

    /// List every recorded entry with its hours
    List,

    /// Print the raw contents of the log file
    Show,

    /// Export completed entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
