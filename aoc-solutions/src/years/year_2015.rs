//! Advent of Code 2015

use aoc_dispatch::{AdventYear, Year, YearTable, year_table};

use crate::announce;

year_table! {
    static TABLE for 2015 = [
        "Not Quite Lisp" => announce,
        "I Was Told There Would Be No Math" => announce,
        "Perfectly Spherical Houses in a Vacuum" => announce,
        "The Ideal Stocking Stuffer" => announce,
        "Doesn't He Have Intern-Elves For This?" => announce,
        "Probably a Fire Hazard" => announce,
        "Some Assembly Required" => announce,
        "Matchsticks" => announce,
        "All in a Single Night" => announce,
        "Elves Look, Elves Say" => announce,
    ];
}

#[derive(AdventYear)]
#[aoc(year = 2015, tags = ["classic"])]
pub struct Year2015;

impl Year for Year2015 {
    fn table(&self) -> &'static YearTable {
        &TABLE
    }
}

/// Run `day` of 2015, or report why it cannot run
pub fn do_advent_of_code(day: i64) {
    TABLE.run(day)
}
