//! Advent of Code Dispatch Library
//!
//! A small framework for running Advent of Code solutions by year and day.
//! Every year is an ordered table of `(title, solver)` entries; one generic
//! dispatcher looks a requested day up and either runs its solver or reports
//! why it cannot.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for day solvers ([`DaySolver`])
//! - Validated, immutable per-year tables ([`YearTable`], [`YearTableBuilder`])
//! - The day dispatcher ([`YearTable::run`], [`do_advent_of_code`])
//! - A plugin system for discovering years ([`YearPlugin`], [`Calendar`])
//!
//! # Quick Example
//!
//! ```
//! use aoc_dispatch::{year_table, Dispatch};
//!
//! year_table! {
//!     static TABLE for 2015 = [
//!         "A" => |_: &str| {},
//!         "B" => |title: &str| println!("running {}", title),
//!         "C" => |_: &str| {},
//!     ];
//! }
//!
//! let mut out = Vec::new();
//! assert_eq!(TABLE.run_to(0, &mut out).unwrap(), Dispatch::Invalid { day: 0 });
//! assert!(TABLE.run_to(2, &mut out).unwrap().is_solved());
//! assert_eq!(TABLE.run_to(5, &mut out).unwrap(), Dispatch::NotComplete { day: 5 });
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "invalid day: 0\nDay 5 is not complete.\n"
//! );
//! ```
//!
//! # Key Concepts
//!
//! ## Day numbering
//!
//! Days are 1-based. The entry for day `d` sits at index `d - 1`, and a table
//! never has gaps. Days at or below zero print `invalid day: {day}`; days past
//! the last entry print `Day {day} is not complete.`. Neither is an error.
//!
//! ## Plugin System and Derive Macro
//!
//! Use `#[derive(AdventYear)]` to register a year automatically:
//! ```ignore
//! #[derive(AdventYear)]
//! #[aoc(year = 2015, tags = ["classic"])]
//! pub struct Year2015;
//! ```

mod calendar;
mod entry;
mod error;
mod table;

// Re-export public API
pub use calendar::{Calendar, CalendarBuilder, Year, YearPlugin};
pub use entry::{DayEntry, DaySolver};
pub use error::{DispatchError, RegistrationError};
pub use table::{
    DAYS_PER_YEAR, Dispatch, Lookup, YearTable, YearTableBuilder, do_advent_of_code,
};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_dispatch_macros::AdventYear;
