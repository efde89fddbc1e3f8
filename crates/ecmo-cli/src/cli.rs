//! CLI argument definitions for the registry dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ecmo-dashboard",
    version,
    about = "Terminal dashboard over ECMO case-report exports",
    long_about = "Normalize a hand-edited ECMO case-report CSV export and render it\n\
                  as a filterable case table with KPIs and per-state/per-type\n\
                  breakdowns. Can also emit a machine-readable JSON snapshot."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the dashboard once.
    Show(ShowArgs),

    /// Re-render the dashboard on a fixed interval.
    Watch(WatchArgs),

    /// Show how canonical fields resolved against the source columns.
    Fields(SourceArgs),
}

#[derive(Parser)]
pub struct SourceArgs {
    /// Path to the case-report CSV export.
    #[arg(value_name = "CSV_PATH")]
    pub csv_path: PathBuf,

    /// Field delimiter used by the export.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: char,
}

#[derive(Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// Write the dashboard snapshot as JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Cap the number of rows in the rendered case table.
    #[arg(long = "max-rows", value_name = "N")]
    pub max_rows: Option<usize>,
}

#[derive(Parser)]
pub struct WatchArgs {
    #[command(flatten)]
    pub show: ShowArgs,

    /// Seconds between refreshes.
    #[arg(long = "refresh-seconds", value_name = "SECONDS", default_value_t = 60)]
    pub refresh_seconds: u64,

    /// Stop after this many refresh cycles instead of running until
    /// interrupted.
    #[arg(long = "cycles", value_name = "N")]
    pub cycles: Option<u64>,
}

/// Per-field equality filters. "All" (or an empty value) means no
/// constraint, matching the choices the registry sheet offers.
#[derive(Parser)]
pub struct FilterArgs {
    /// Keep only cases in this state.
    #[arg(long = "state", value_name = "VALUE", default_value = "All")]
    pub state: String,

    /// Keep only cases in this city.
    #[arg(long = "city", value_name = "VALUE", default_value = "All")]
    pub city: String,

    /// Keep only cases at this hospital.
    #[arg(long = "hospital", value_name = "VALUE", default_value = "All")]
    pub hospital: String,

    /// Keep only cases of this ECMO type (e.g. VV, VA).
    #[arg(long = "ecmo-type", value_name = "VALUE", default_value = "All")]
    pub ecmo_type: String,

    /// Keep only cases with this status (e.g. Active).
    #[arg(long = "status", value_name = "VALUE", default_value = "All")]
    pub status: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
