//! Year tables and the day dispatcher

use crate::entry::{DayEntry, DaySolver};
use crate::error::RegistrationError;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;

/// Result of looking a day up in a table, without running anything
#[derive(Debug)]
pub enum Lookup<'a> {
    /// The day is zero or negative
    Invalid,
    /// The day has an entry
    Found(&'a DayEntry),
    /// The day is past the highest implemented day
    NotComplete,
}

/// What a call to [`YearTable::run_to`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The day was zero or negative; the invalid-day line was written
    Invalid { day: i64 },
    /// The day is not implemented yet; the not-complete line was written
    NotComplete { day: i64 },
    /// The solver for `day` ran once
    Solved {
        day: u8,
        title: &'static str,
        started: DateTime<Utc>,
        finished: DateTime<Utc>,
    },
}

impl Dispatch {
    /// Time spent inside the solver, zero for the reported branches
    pub fn elapsed(&self) -> TimeDelta {
        match self {
            Dispatch::Solved {
                started, finished, ..
            } => *finished - *started,
            _ => TimeDelta::zero(),
        }
    }

    /// Whether a solver was invoked
    pub fn is_solved(&self) -> bool {
        matches!(self, Dispatch::Solved { .. })
    }
}

impl fmt::Display for Dispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatch::Invalid { day } => write!(f, "invalid day: {}", day),
            Dispatch::NotComplete { day } => write!(f, "Day {} is not complete.", day),
            Dispatch::Solved { day, title, .. } => write!(f, "Day {}: {}", day, title),
        }
    }
}

/// Ordered, immutable table of the implemented days of one year
///
/// Index 0 holds day 1 and there are no gaps, so the entry for day `d` is
/// always at `d - 1`. Tables are built once through [`YearTableBuilder`] and
/// never change afterwards; the usual home for one is a `LazyLock` static
/// created with [`year_table!`](crate::year_table).
///
/// # Example
///
/// ```
/// use aoc_dispatch::{Dispatch, YearTable};
///
/// let table = YearTable::builder(2015)
///     .push("A", |_: &str| {})
///     .unwrap()
///     .push("B", |_: &str| {})
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let mut out = Vec::new();
/// let outcome = table.run_to(5, &mut out).unwrap();
/// assert_eq!(outcome, Dispatch::NotComplete { day: 5 });
/// assert_eq!(String::from_utf8(out).unwrap(), "Day 5 is not complete.\n");
/// ```
#[derive(Debug)]
pub struct YearTable {
    year: u16,
    days: Vec<DayEntry>,
}

impl YearTable {
    /// Start building the table for `year`
    pub fn builder(year: u16) -> YearTableBuilder {
        YearTableBuilder::new(year)
    }

    /// The year this table belongs to
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Number of implemented days
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no day is implemented yet
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Entry for a 1-based day, if implemented
    pub fn get(&self, day: i64) -> Option<&DayEntry> {
        match self.locate(day) {
            Lookup::Found(entry) => Some(entry),
            _ => None,
        }
    }

    /// Iterate over `(day, title)` pairs in day order
    pub fn titles(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        self.days
            .iter()
            .enumerate()
            .map(|(i, entry)| (i as u8 + 1, entry.title()))
    }

    /// Classify a 1-based day against this table
    pub fn locate(&self, day: i64) -> Lookup<'_> {
        let index = match day.checked_sub(1) {
            Some(index) if index >= 0 => index,
            _ => return Lookup::Invalid,
        };
        usize::try_from(index)
            .ok()
            .and_then(|i| self.days.get(i))
            .map_or(Lookup::NotComplete, Lookup::Found)
    }

    /// Run the solver for `day`, or report why it cannot run
    ///
    /// Report lines go to `out`; the solver itself writes wherever it likes.
    /// A panic raised by the solver is not caught here.
    ///
    /// # Returns
    /// * `Ok(Dispatch)` - Which branch was taken
    /// * `Err(io::Error)` - Writing the report line failed
    pub fn run_to<W>(&self, day: i64, out: &mut W) -> io::Result<Dispatch>
    where
        W: Write + ?Sized,
    {
        tracing::debug!(year = self.year, day, "dispatching");

        let outcome = match self.locate(day) {
            Lookup::Invalid => Dispatch::Invalid { day },
            Lookup::NotComplete => Dispatch::NotComplete { day },
            Lookup::Found(entry) => {
                // `locate` only finds indices below DAYS_PER_YEAR
                let day = day as u8;
                let _span =
                    tracing::info_span!("solve", year = self.year, day, title = entry.title())
                        .entered();

                let started = Utc::now();
                entry.solve();
                let finished = Utc::now();

                let outcome = Dispatch::Solved {
                    day,
                    title: entry.title(),
                    started,
                    finished,
                };
                tracing::info!(elapsed = ?outcome.elapsed(), "solved");
                return Ok(outcome);
            }
        };

        writeln!(out, "{}", outcome)?;
        Ok(outcome)
    }

    /// Run the solver for `day` with report lines on stdout
    pub fn run(&self, day: i64) {
        if let Err(e) = self.run_to(day, &mut io::stdout()) {
            tracing::warn!(year = self.year, day, error = %e, "failed to write report line");
        }
    }
}

/// Builder for a [`YearTable`]
///
/// Every registration is validated as it happens and `build` checks that the
/// days form an unbroken run starting at day 1, so a table that builds is
/// always well-formed.
pub struct YearTableBuilder {
    year: u16,
    days: BTreeMap<u8, DayEntry>,
}

impl YearTableBuilder {
    /// Create an empty builder for `year`
    pub fn new(year: u16) -> Self {
        Self {
            year,
            days: BTreeMap::new(),
        }
    }

    /// Register a solver for an explicit day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the day registered, ready for chaining
    /// * `Err(RegistrationError)` - Day out of range, already taken, or a bad title
    pub fn day<S>(
        mut self,
        day: u8,
        title: &'static str,
        solver: S,
    ) -> Result<Self, RegistrationError>
    where
        S: DaySolver + 'static,
    {
        let year = self.year;
        if day == 0 || day as usize > DAYS_PER_YEAR {
            return Err(RegistrationError::DayOutOfRange(year, day));
        }
        if self.days.contains_key(&day) {
            return Err(RegistrationError::DuplicateDay(year, day));
        }
        if title.trim().is_empty() {
            return Err(RegistrationError::EmptyTitle(year, day));
        }
        if let Some((&first, _)) = self.days.iter().find(|(_, e)| e.title() == title) {
            return Err(RegistrationError::DuplicateTitle {
                year,
                title,
                first,
                second: day,
            });
        }

        self.days.insert(day, DayEntry::new(title, solver));
        Ok(self)
    }

    /// Register a solver for the day after the highest one registered so far
    pub fn push<S>(self, title: &'static str, solver: S) -> Result<Self, RegistrationError>
    where
        S: DaySolver + 'static,
    {
        let next = self
            .days
            .last_key_value()
            .map_or(1, |(&day, _)| day.saturating_add(1));
        self.day(next, title, solver)
    }

    /// Finalize the table
    ///
    /// Fails with `MissingDay` for the first hole below the highest day.
    pub fn build(self) -> Result<YearTable, RegistrationError> {
        let year = self.year;
        let mut days = Vec::with_capacity(self.days.len());
        for (expected, (day, entry)) in (1u8..).zip(self.days) {
            if day != expected {
                return Err(RegistrationError::MissingDay(year, expected));
            }
            days.push(entry);
        }
        Ok(YearTable { year, days })
    }
}

/// Run `day` against `table`, printing the report lines on stdout
pub fn do_advent_of_code(table: &YearTable, day: i64) {
    table.run(day)
}

/// Declare a lazily built year table
///
/// Days are numbered from 1 in listing order. The table is built on first
/// access; a malformed listing aborts with the registration error.
///
/// # Example
///
/// ```
/// use aoc_dispatch::year_table;
///
/// fn banner(title: &str) {
///     println!("--- {} ---", title);
/// }
///
/// year_table! {
///     static TABLE for 2017 = [
///         "Inverse Captcha" => banner,
///         "Corruption Checksum" => banner,
///     ];
/// }
///
/// assert_eq!(TABLE.year(), 2017);
/// assert_eq!(TABLE.len(), 2);
/// ```
#[macro_export]
macro_rules! year_table {
    ($vis:vis static $name:ident for $year:literal = [ $($title:literal => $solver:expr),* $(,)? ];) => {
        $vis static $name: ::std::sync::LazyLock<$crate::YearTable> =
            ::std::sync::LazyLock::new(|| {
                let builder = $crate::YearTable::builder($year);
                $(
                    let builder = builder
                        .push($title, $solver)
                        .unwrap_or_else(|e| panic!("invalid day table: {}", e));
                )*
                builder
                    .build()
                    .unwrap_or_else(|e| panic!("invalid day table: {}", e))
            });
    };
}
