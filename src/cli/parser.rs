use crate::export::{ExportFormat, ExportTarget};
use crate::import::ImportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ExprimeTonCampus
/// Anonymous campus feedback board in the terminal
#[derive(Parser)]
#[command(
    name = "exprimetoncampus",
    version = env!("CARGO_PKG_VERSION"),
    about = "Anonymous campus feedback: top places, statistics by place and emotion, message list",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Bulk-load records from a CSV or JSON file (repeatable, prepended in order)
    #[arg(global = true, long = "import", value_name = "FILE")]
    pub import: Vec<String>,

    /// Format of the --import files (default: from extension)
    #[arg(global = true, long = "import-format", value_enum)]
    pub import_format: Option<ImportFormat>,

    /// Start from an empty board instead of the sample messages
    #[arg(global = true, long = "no-seed")]
    pub no_seed: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
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

    /// Home page: totals and most mentioned places
    Home {
        #[arg(long, help = "Number of places to show (default: config top_places)")]
        top: Option<usize>,
    },

    /// Statistics: messages per place and per emotion
    Stats {
        #[arg(long, help = "Sort groups by count instead of first appearance")]
        sort: bool,

        #[arg(long, help = "Plain name/value output, no colors or bars")]
        plain: bool,
    },

    /// List messages, optionally filtered
    Messages {
        #[arg(
            long,
            short,
            help = "Place substring (case-insensitive) or exact emotion"
        )]
        query: Option<String>,

        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY-MM:YYYY-MM)"
        )]
        period: Option<String>,
    },

    /// Show one message in full
    Show {
        /// Message id
        id: u32,
    },

    /// How to share a message
    Guide,

    /// About the project
    About,

    /// Export messages or statistics
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "records")]
        what: ExportTarget,

        #[arg(long, short, help = "Same filter as `messages --query`")]
        query: Option<String>,

        #[arg(long, short, value_name = "RANGE", help = "Same filter as `messages --period`")]
        period: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
