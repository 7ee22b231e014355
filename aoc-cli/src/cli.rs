//! CLI argument parsing using clap

use clap::{ArgAction, Parser};

/// Advent of Code day launcher
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run an Advent of Code day", version)]
pub struct Args {
    /// Year to run (latest registered year if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run, 1-based; out-of-range values are reported, not rejected
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        required_unless_present = "list"
    )]
    pub day: Option<i64>,

    /// List registered years and their days instead of running one
    #[arg(short, long, conflicts_with = "day")]
    pub list: bool,

    /// Tags to filter years (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_day_accepted() {
        let args = Args::try_parse_from(["aoc", "--year", "2015", "--day", "-3"]).unwrap();
        assert_eq!(args.year, Some(2015));
        assert_eq!(args.day, Some(-3));
    }

    #[test]
    fn test_day_required_without_list() {
        assert!(Args::try_parse_from(["aoc", "--year", "2015"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--list"]).is_ok());
    }

    #[test]
    fn test_tags_split_on_comma() {
        let args = Args::try_parse_from(["aoc", "-l", "-t", "classic,intcode"]).unwrap();
        assert_eq!(args.tags, vec!["classic", "intcode"]);
    }

    #[test]
    fn test_verbosity_counts() {
        let args = Args::try_parse_from(["aoc", "-d", "1", "-vvv"]).unwrap();
        assert_eq!(args.verbose, 3);
    }
}
