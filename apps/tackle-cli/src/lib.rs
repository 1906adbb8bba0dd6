//! # Tackle Hire Console
//!
//! Wires the pure `tackle-core` logic to a terminal.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse Arguments ──────────────────────────────────────────────────► │
//! │     • clap derive, see config::Cli                                      │
//! │                                                                         │
//! │  2. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: --log-level (warn), overridden by RUST_LOG               │
//! │                                                                         │
//! │  3. Load Test Data (optional) ────────────────────────────────────────► │
//! │     • --load FILE, bad rows skipped and listed                          │
//! │                                                                         │
//! │  4. Report Only? ─────────────────────────────────────────────────────► │
//! │     • --report prints the report and exits                              │
//! │     • otherwise the menu runs on stdin/stdout                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod controller;
pub mod error;
pub mod loader;

use std::io::{self, Write};

use tackle_core::report::EarningsReport;
use tackle_core::HireLedger;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{AppConfig, Cli, ReportFormat};
pub use console::Console;
pub use controller::Shop;
pub use error::{AppError, AppResult};

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Logs go to stderr; stdout carries only prompts and reports.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs the application against the process's stdin and stdout.
pub fn run(config: AppConfig) -> AppResult<()> {
    info!(?config, "Starting tackle-hire");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(&config, stdin.lock(), stdout.lock())
}

/// Runs the application over any input and output pair.
pub fn run_with<R, W>(config: &AppConfig, input: R, mut output: W) -> AppResult<()>
where
    R: io::BufRead,
    W: Write,
{
    let mut ledger = HireLedger::new();

    if let Some(path) = &config.load_path {
        let summary = loader::load_hires(path, &mut ledger)?;
        writeln!(
            output,
            "Loaded {} hire(s) from {}.",
            summary.loaded,
            path.display()
        )?;
        for rejected in &summary.rejected {
            writeln!(output, "  skipped: {rejected}")?;
        }
    }

    if config.report_only {
        let report = EarningsReport::from_records(ledger.records());
        let text = controller::render_report(&report, config.report_format)?;
        output.write_all(text.as_bytes())?;
        output.flush()?;
        return Ok(());
    }

    let mut shop = Shop::new(Console::new(input, output), ledger, config.report_format);
    shop.run()
}
