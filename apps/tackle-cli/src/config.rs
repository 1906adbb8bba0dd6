//! Console configuration.
//!
//! Everything comes from command-line flags; there are no config files and no
//! application environment variables. `RUST_LOG`, when set, still overrides
//! `--log-level` (see [`crate::init_tracing`]).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// How the earnings report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "tackle-hire",
    version,
    about = "Equipment hire shop: record hires and print the earnings report"
)]
pub struct Cli {
    /// CSV file of hires to record before the menu starts
    #[arg(short = 'l', long = "load", value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Print the report for the loaded hires and exit without the menu
    #[arg(long, requires = "load")]
    pub report: bool,

    /// Report output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Test-data file to ingest at startup.
    pub load_path: Option<PathBuf>,

    /// Skip the interactive menu and only print the report.
    pub report_only: bool,

    pub report_format: ReportFormat,

    /// Default tracing filter directive.
    pub log_level: String,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        AppConfig {
            load_path: cli.load,
            report_only: cli.report,
            report_format: cli.format,
            log_level: cli.log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            load_path: None,
            report_only: false,
            report_format: ReportFormat::Table,
            log_level: "warn".to_string(),
        }
    }
}
