use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShiftLog
#[derive(Parser)]
#[command(
    name = "rshiftlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log paid shifts, follow weekly/monthly earnings and a weekly hours cap (SQLite)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long = "demo", help = "Pre-fill a few sample shifts (only into an empty database)")]
        demo: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Log a shift
    Add {
        /// Date of the shift (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Start time (HH:MM, or '-' for unspecified)")]
        start: Option<String>,

        #[arg(long = "out", help = "End time (HH:MM, or '-' for unspecified)")]
        end: Option<String>,

        #[arg(
            long = "hours",
            help = "Worked hours; derived from --in/--out when omitted"
        )]
        hours: Option<f64>,

        #[arg(long = "pay-cut", help = "Pay cut recorded for this shift")]
        pay_cut: Option<f64>,
    },

    /// Show the shift history
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (A:B), default all"
        )]
        period: Option<String>,
    },

    /// Delete a shift by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Mark shifts as paid
    Paid {
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        id: Option<i64>,

        #[arg(long = "all", help = "Mark every shift as paid")]
        all: bool,
    },

    /// Manage term dates (weeks without the weekly cap)
    Term {
        #[command(subcommand)]
        action: TermAction,
    },

    /// Show or change hourly rate, weekly limit and payday
    Settings {
        #[arg(long = "rate", help = "Hourly rate")]
        rate: Option<f64>,

        #[arg(long = "limit", help = "Weekly hours limit outside terms")]
        limit: Option<f64>,

        #[arg(long = "payday", help = "Payday anchor (YYYY-MM-DD)")]
        payday: Option<String>,

        #[arg(long = "clear-payday", conflicts_with = "payday")]
        clear_payday: bool,
    },

    /// Weekly/monthly/total figures and weekly limit status
    Dashboard {
        #[arg(long = "at", help = "Compute as of this date (YYYY-MM-DD), default today")]
        at: Option<String>,

        #[arg(
            long = "payday",
            help = "Payday anchor for this run only (YYYY-MM-DD)"
        )]
        payday: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export shifts
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
}

#[derive(Subcommand)]
pub enum TermAction {
    /// Add a term (both dates inclusive)
    Add { start: String, end: String },
    /// List terms
    List,
    /// Delete a term by id
    Del { id: i64 },
}
