//! AOC CLI - Command-line launcher for Advent of Code day tables

mod cli;
mod config;
mod error;
mod output;

// Import aoc-solutions to link the year plugins
use aoc_solutions as _;

use aoc_dispatch::{Calendar, CalendarBuilder};
use clap::Parser;
use cli::Args;
use config::{Config, Mode};
use error::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(&config.log_filter)?;

    // Build calendar with tag filtering (only once)
    let calendar = build_calendar(&config.tags)?;

    match config.mode {
        Mode::List => output::write_listing(&calendar, &mut std::io::stdout().lock())?,
        Mode::Run { day } => {
            let year = resolve_year(&calendar, config.year)?;
            tracing::info!(year, day, "running");
            calendar.do_advent_of_code(year, day)?;
        }
    }
    Ok(())
}

/// Install the stderr log subscriber so stdout carries only solver output
fn init_logging(filter: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| CliError::Config(format!("Invalid log filter {:?}: {}", filter, e)))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// Build calendar with tag filtering
fn build_calendar(tags: &[String]) -> Result<Calendar, CliError> {
    let builder = CalendarBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_year_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

/// Use the requested year, or the latest registered one
fn resolve_year(calendar: &Calendar, requested: Option<u16>) -> Result<u16, CliError> {
    requested
        .or_else(|| calendar.latest())
        .ok_or_else(|| CliError::Config("No years registered matching the given tags".to_string()))
}
