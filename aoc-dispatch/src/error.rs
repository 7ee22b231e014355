//! Error types for the dispatch library

use thiserror::Error;

/// Error type for building year tables and calendars
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a day that already has an entry
    #[error("Duplicate registration for year {0} day {1}")]
    DuplicateDay(u16, u8),
    /// Day number outside of 1-25
    #[error("Day {1} is out of range for year {0} (expected 1-25)")]
    DayOutOfRange(u16, u8),
    /// Title is empty or whitespace only
    #[error("Empty title for year {0} day {1}")]
    EmptyTitle(u16, u8),
    /// The same title was given to two days of one year
    #[error("Title {title:?} is used by both day {first} and day {second} of {year}")]
    DuplicateTitle {
        year: u16,
        title: &'static str,
        first: u8,
        second: u8,
    },
    /// Days must be contiguous from day 1 up to the highest registered day
    #[error("Year {0} is missing day {1}")]
    MissingDay(u16, u8),
    /// Attempted to register a year that already exists in the calendar
    #[error("Duplicate registration for year {0}")]
    DuplicateYear(u16),
    /// A plugin advertised a year different from the one its table was built for
    #[error("Plugin for year {plugin} provides the table for year {table}")]
    YearMismatch { plugin: u16, table: u16 },
}

/// Error type for dispatching through a calendar
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No table is registered for the requested year
    #[error("No solutions registered for year {0}")]
    UnknownYear(u16),
    /// Writing a report line failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
