//! Year plugins and the calendar of registered years

use crate::error::{DispatchError, RegistrationError};
use crate::table::YearTable;
use std::collections::BTreeMap;

/// Trait for types that expose the table of one year
///
/// Implementors are usually unit structs that hand out a `LazyLock` static
/// declared with [`year_table!`](crate::year_table). Deriving
/// [`AdventYear`](crate::AdventYear) on such a struct submits it to the plugin
/// inventory.
///
/// # Example
///
/// ```
/// use aoc_dispatch::{year_table, Year, YearTable};
///
/// year_table! {
///     static TABLE for 2016 = [
///         "No Time for a Taxicab" => |_: &str| {},
///     ];
/// }
///
/// struct Year2016;
///
/// impl Year for Year2016 {
///     fn table(&self) -> &'static YearTable {
///         &TABLE
///     }
/// }
///
/// assert_eq!(Year2016.table().len(), 1);
/// ```
pub trait Year: Sync {
    /// The table of this year's implemented days
    fn table(&self) -> &'static YearTable;
}

/// Plugin information for automatic year registration
///
/// # Example
///
/// ```no_run
/// use aoc_dispatch::{year_table, Year, YearPlugin, YearTable};
///
/// year_table! {
///     static TABLE for 2018 = [
///         "Chronal Calibration" => |_: &str| {},
///     ];
/// }
///
/// struct Year2018;
///
/// impl Year for Year2018 {
///     fn table(&self) -> &'static YearTable {
///         &TABLE
///     }
/// }
///
/// aoc_dispatch::inventory::submit! {
///     YearPlugin {
///         year: 2018,
///         registry: &Year2018,
///         tags: &["intro"],
///     }
/// }
/// ```
pub struct YearPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The year's table provider (type-erased)
    pub registry: &'static dyn Year,
    /// Optional tags for filtering
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(YearPlugin);

/// Builder for constructing a [`Calendar`]
///
/// Rejects a year registered twice. Tables are forced (built) at registration
/// time, so a malformed table surfaces here rather than on first dispatch.
pub struct CalendarBuilder {
    years: BTreeMap<u16, &'static YearTable>,
}

impl CalendarBuilder {
    /// Create a new empty calendar builder
    pub fn new() -> Self {
        Self {
            years: BTreeMap::new(),
        }
    }

    /// Register one year plugin
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the year registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate year or a plugin/table year mismatch
    pub fn register(mut self, plugin: &YearPlugin) -> Result<Self, RegistrationError> {
        if self.years.contains_key(&plugin.year) {
            return Err(RegistrationError::DuplicateYear(plugin.year));
        }
        let table = plugin.registry.table();
        if table.year() != plugin.year {
            return Err(RegistrationError::YearMismatch {
                plugin: plugin.year,
                table: table.year(),
            });
        }

        tracing::debug!(year = plugin.year, days = table.len(), "registered year");
        self.years.insert(plugin.year, table);
        Ok(self)
    }

    /// Register all collected year plugins
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_year_plugins(|_| true)
    }

    /// Register year plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_dispatch::CalendarBuilder;
    /// let calendar = CalendarBuilder::new()
    ///     .register_year_plugins(|plugin| plugin.tags.contains(&"intcode"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_year_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&YearPlugin) -> bool,
    {
        for plugin in inventory::iter::<YearPlugin>() {
            if filter(plugin) {
                self = self.register(plugin)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable calendar
    pub fn build(self) -> Calendar {
        Calendar { years: self.years }
    }
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable map from year to that year's table
pub struct Calendar {
    years: BTreeMap<u16, &'static YearTable>,
}

impl Calendar {
    /// Table for `year`, if registered
    pub fn year(&self, year: u16) -> Option<&'static YearTable> {
        self.years.get(&year).copied()
    }

    /// Registered years in ascending order
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.years.keys().copied()
    }

    /// Iterate over all tables in year order
    pub fn tables(&self) -> impl Iterator<Item = &'static YearTable> + '_ {
        self.years.values().copied()
    }

    /// Most recent registered year
    pub fn latest(&self) -> Option<u16> {
        self.years.keys().next_back().copied()
    }

    /// Number of registered years
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Whether no year is registered
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Forward `day` to the dispatcher of `year`
    ///
    /// # Returns
    /// * `Ok(())` - The year exists; the day was run or reported on stdout
    /// * `Err(DispatchError::UnknownYear)` - No table for `year`
    pub fn do_advent_of_code(&self, year: u16, day: i64) -> Result<(), DispatchError> {
        let table = self.year(year).ok_or(DispatchError::UnknownYear(year))?;
        table.run(day);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::year_table;

    year_table! {
        static TABLE_2015 for 2015 = [
            "Not Quite Lisp" => |_: &str| {},
        ];
    }

    year_table! {
        static TABLE_2016 for 2016 = [
            "No Time for a Taxicab" => |_: &str| {},
            "Bathroom Security" => |_: &str| {},
        ];
    }

    struct Fixed(&'static std::sync::LazyLock<YearTable>);

    impl Year for Fixed {
        fn table(&self) -> &'static YearTable {
            self.0
        }
    }

    static FIXED_2015: Fixed = Fixed(&TABLE_2015);
    static FIXED_2016: Fixed = Fixed(&TABLE_2016);

    fn plugin(year: u16, registry: &'static Fixed) -> YearPlugin {
        YearPlugin {
            year,
            registry,
            tags: &[],
        }
    }

    #[test]
    fn test_years_sorted_and_latest() {
        let calendar = CalendarBuilder::new()
            .register(&plugin(2016, &FIXED_2016))
            .unwrap()
            .register(&plugin(2015, &FIXED_2015))
            .unwrap()
            .build();

        assert_eq!(calendar.years().collect::<Vec<_>>(), vec![2015, 2016]);
        assert_eq!(calendar.latest(), Some(2016));
        assert_eq!(calendar.year(2016).unwrap().len(), 2);
        assert!(calendar.year(2017).is_none());
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let result = CalendarBuilder::new()
            .register(&plugin(2015, &FIXED_2015))
            .unwrap()
            .register(&plugin(2015, &FIXED_2015));
        assert!(matches!(result, Err(RegistrationError::DuplicateYear(2015))));
    }

    #[test]
    fn test_year_mismatch_rejected() {
        let result = CalendarBuilder::new().register(&plugin(2020, &FIXED_2015));
        assert!(matches!(
            result,
            Err(RegistrationError::YearMismatch {
                plugin: 2020,
                table: 2015
            })
        ));
    }

    #[test]
    fn test_unknown_year() {
        let calendar = CalendarBuilder::new().build();
        assert!(calendar.is_empty());
        assert!(matches!(
            calendar.do_advent_of_code(2015, 1),
            Err(DispatchError::UnknownYear(2015))
        ));
    }
}
