use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimecard
/// CLI application to track daily work hours and calculate overtime
#[derive(Parser)]
#[command(
    name = "rtimecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-hours CLI: record clock-in/clock-out times and calculate overtime",
    long_about = None
)]
pub struct Cli {
    /// Override the entries store directory (useful for tests or custom locations)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the entries store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the entry (or a default draft) for a date
    Show {
        /// Date to show (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Add or update the entry for a date
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,
    },

    /// Delete the entry for a date
    Del {
        /// Date of the entry to delete (YYYY-MM-DD)
        date: String,
    },

    /// List saved entries, newest first, with totals
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (e.g. 2025, 2025-09, 2025-09-01:2025-09-15)"
        )]
        period: Option<String>,
    },

    /// Export saved entries as a report
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

    /// Create a backup copy of the entries store
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
