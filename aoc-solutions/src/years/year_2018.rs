//! Advent of Code 2018

use aoc_dispatch::{AdventYear, Year, YearTable, year_table};

use crate::announce;

year_table! {
    static TABLE for 2018 = [
        "Chronal Calibration" => announce,
        "Inventory Management System" => announce,
        "No Matter How You Slice It" => announce,
        "Repose Record" => announce,
        "Alchemical Reduction" => announce,
        "Chronal Coordinates" => announce,
    ];
}

#[derive(AdventYear)]
#[aoc(year = 2018, tags = ["classic"])]
pub struct Year2018;

impl Year for Year2018 {
    fn table(&self) -> &'static YearTable {
        &TABLE
    }
}

/// Run `day` of 2018, or report why it cannot run
pub fn do_advent_of_code(day: i64) {
    TABLE.run(day)
}
