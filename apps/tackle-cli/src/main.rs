//! tackle-hire binary entry point.

use anyhow::Context;
use clap::Parser;

use tackle_cli::{init_tracing, run, AppConfig, Cli};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(Cli::parse());
    init_tracing(&config.log_level);

    run(config).context("tackle-hire stopped")
}
