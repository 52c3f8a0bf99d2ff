//! `outreach` command-line entry point.
//!
//! # Responsibility
//! - Parse flags, start optional file logging and dispatch one command.

mod cli;
mod commands;
mod render;
mod snapshot_file;

use clap::Parser;
use cli::Cli;
use outreach_core::{default_log_level, init_logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.unwrap_or_else(default_log_level);
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    commands::run(cli)
}
