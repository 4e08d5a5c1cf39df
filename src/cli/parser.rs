use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for openhours
#[derive(Parser)]
#[command(
    name = "openhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resolve a listing's business hours and tell whether it is open right now",
    long_about = None
)]
pub struct Cli {
    /// Use an alternate configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// The instant to evaluate at. Anything omitted comes from the device clock.
#[derive(Args, Clone, Debug, Default)]
pub struct ClockArgs {
    /// Calendar date to evaluate (YYYY-MM-DD); the weekday is derived from it
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Local time of day to evaluate (HH:MM, 24h)
    #[arg(long = "now", value_name = "HH:MM")]
    pub now: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show the current configuration
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,
    },

    /// Print whether the listing is open right now
    Status {
        /// Listing JSON (full listing payload or its `bh` object)
        file: PathBuf,

        #[command(flatten)]
        clock: ClockArgs,

        /// Print the verdict as JSON instead of a label
        #[arg(long)]
        json: bool,
    },

    /// Print the opening hours of the whole week
    Week {
        /// Listing JSON (full listing payload or its `bh` object)
        file: PathBuf,

        #[command(flatten)]
        clock: ClockArgs,
    },

    /// Print the weekly schedule with today's special override applied
    Resolve {
        /// Listing JSON (full listing payload or its `bh` object)
        file: PathBuf,

        /// Calendar date to resolve for (YYYY-MM-DD)
        #[arg(long = "date", value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },

    /// Export the evaluated week in various formats
    Export {
        /// Listing JSON (full listing payload or its `bh` object)
        file: PathBuf,

        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "output", short = 'o', value_name = "FILE")]
        output: PathBuf,

        #[command(flatten)]
        clock: ClockArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
