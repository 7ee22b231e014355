//! Advent of Code 2017

use aoc_dispatch::{AdventYear, Year, YearTable, year_table};

use crate::announce;

year_table! {
    static TABLE for 2017 = [
        "Inverse Captcha" => announce,
        "Corruption Checksum" => announce,
        "Spiral Memory" => announce,
        "High-Entropy Passphrases" => announce,
        "A Maze of Twisty Trampolines, All Alike" => announce,
        "Memory Reallocation" => announce,
        "Recursive Circus" => announce,
    ];
}

#[derive(AdventYear)]
#[aoc(year = 2017, tags = ["classic"])]
pub struct Year2017;

impl Year for Year2017 {
    fn table(&self) -> &'static YearTable {
        &TABLE
    }
}

/// Run `day` of 2017, or report why it cannot run
pub fn do_advent_of_code(day: i64) {
    TABLE.run(day)
}
