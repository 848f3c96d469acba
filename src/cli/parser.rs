use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hydrolog
/// CLI application to track water intake with a CSV log
#[derive(Parser)]
#[command(
    name = "hydrolog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple hydration logging CLI: track water intake against a daily goal in a CSV log",
    long_about = None
)]
pub struct Cli {
    /// Override the log file path (useful for tests or a custom log)
    #[arg(global = true, long = "log")]
    pub log: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the hydration log
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the active configuration")]
        print_config: bool,
    },

    /// Log a water intake
    Add {
        /// Amount drunk, in milliliters
        amount_ml: u32,

        /// Log at an explicit instant instead of now (YYYY-MM-DDTHH:MM:SS)
        #[arg(long = "at", value_name = "INSTANT")]
        at: Option<String>,
    },

    /// Delete logged entries
    Del {
        /// Entry ids as shown by `list`
        ids: Vec<usize>,

        /// Delete every entry of this date instead (YYYY-MM-DD)
        #[arg(long = "date", conflicts_with = "ids")]
        date: Option<String>,
    },

    /// List logged entries
    List {
        /// Date to list (YYYY-MM-DD, default today)
        #[arg(long = "date", conflicts_with = "all")]
        date: Option<String>,

        /// List the whole log instead of a single day
        #[arg(long = "all")]
        all: bool,
    },

    /// Show the daily total against the goal
    Status {
        /// Date to inspect (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Show daily totals for the trailing days
    History {
        /// Window length in days (default from the configuration)
        #[arg(long = "days")]
        days: Option<usize>,

        /// Last day of the window (YYYY-MM-DD, default today)
        #[arg(long = "until", value_name = "DATE")]
        until: Option<String>,
    },

    /// Export the hydration log
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
