//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `prospect_dedup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use prospect_dedup::config::Opt;
use prospect_dedup::initialization::init_logger_with;
use prospect_dedup::{print_comparison_statistics, print_simple_summary, run_comparison, Config};

fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_comparison(&config) {
        Ok(report) => {
            print_simple_summary(&report.comparison, report.elapsed_seconds);
            if config.show_stats {
                print_comparison_statistics(&report.comparison);
            }
            println!("{}", report.saved_message());
            Ok(())
        }
        Err(e) => {
            eprintln!("prospect_dedup error: {:#}", e);
            process::exit(1);
        }
    }
}
