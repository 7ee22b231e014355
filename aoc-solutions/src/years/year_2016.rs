//! Advent of Code 2016

use aoc_dispatch::{AdventYear, Year, YearTable, year_table};

use crate::announce;

year_table! {
    static TABLE for 2016 = [
        "No Time for a Taxicab" => announce,
        "Bathroom Security" => announce,
        "Squares With Three Sides" => announce,
        "Security Through Obscurity" => announce,
        "How About a Nice Game of Chess?" => announce,
        "Signals and Noise" => announce,
        "Internet Protocol Version 7" => announce,
        "Two-Factor Authentication" => announce,
    ];
}

#[derive(AdventYear)]
#[aoc(year = 2016, tags = ["classic"])]
pub struct Year2016;

impl Year for Year2016 {
    fn table(&self) -> &'static YearTable {
        &TABLE
    }
}

/// Run `day` of 2016, or report why it cannot run
pub fn do_advent_of_code(day: i64) {
    TABLE.run(day)
}
