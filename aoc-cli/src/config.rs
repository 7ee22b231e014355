//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;

/// Environment variable holding a full `tracing` filter directive
pub const LOG_ENV: &str = "AOC_LOG";

/// What the launcher should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the registered years and their titles
    List,
    /// Dispatch one day
    Run { day: i64 },
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year to run (None = latest registered)
    pub year: Option<u16>,
    /// Listing or running
    pub mode: Mode,
    /// Tags to filter years
    pub tags: Vec<String>,
    /// Filter directive for the log subscriber
    pub log_filter: String,
}

impl Config {
    /// Build config from CLI args, reading the log filter override from the environment
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        Self::resolve(args, std::env::var(LOG_ENV).ok())
    }

    /// Build config from CLI args and an explicit log filter override
    pub fn resolve(args: Args, env_filter: Option<String>) -> Result<Self, CliError> {
        let mode = match (args.list, args.day) {
            (true, _) => Mode::List,
            (false, Some(day)) => Mode::Run { day },
            (false, None) => {
                return Err(CliError::Config(
                    "--day is required unless --list is given".to_string(),
                ));
            }
        };

        Ok(Config {
            year: args.year,
            mode,
            tags: args.tags,
            log_filter: log_filter(args.verbose, args.quiet, env_filter),
        })
    }
}

/// Pick the log filter: a non-empty environment override wins, then flags
fn log_filter(verbose: u8, quiet: bool, env_filter: Option<String>) -> String {
    if let Some(filter) = env_filter.filter(|f| !f.trim().is_empty()) {
        return filter;
    }
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    level.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_mode() {
        let config = Config::resolve(args(&["-y", "2016", "-d", "4"]), None).unwrap();
        assert_eq!(config.year, Some(2016));
        assert_eq!(config.mode, Mode::Run { day: 4 });
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_list_mode_without_day() {
        let config = Config::resolve(args(&["--list"]), None).unwrap();
        assert_eq!(config.mode, Mode::List);
        assert_eq!(config.year, None);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_filter(0, true, None), "error");
        assert_eq!(log_filter(1, false, None), "info");
        assert_eq!(log_filter(2, false, None), "debug");
        assert_eq!(log_filter(7, false, None), "trace");
    }

    #[test]
    fn test_env_override_wins() {
        let config = Config::resolve(
            args(&["-d", "1", "-vv"]),
            Some("aoc_dispatch=trace".to_string()),
        )
        .unwrap();
        assert_eq!(config.log_filter, "aoc_dispatch=trace");

        assert_eq!(log_filter(1, false, Some("   ".to_string())), "info");
    }
}
