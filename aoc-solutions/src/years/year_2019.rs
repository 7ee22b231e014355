//! Advent of Code 2019, the Intcode year

use aoc_dispatch::{AdventYear, Year, YearTable, year_table};

use crate::announce;

year_table! {
    static TABLE for 2019 = [
        "The Tyranny of the Rocket Equation" => announce,
        "1202 Program Alarm" => announce,
        "Crossed Wires" => announce,
        "Secure Container" => announce,
        "Sunny with a Chance of Asteroids" => announce,
    ];
}

#[derive(AdventYear)]
#[aoc(year = 2019, tags = ["intcode"])]
pub struct Year2019;

impl Year for Year2019 {
    fn table(&self) -> &'static YearTable {
        &TABLE
    }
}

/// Run `day` of 2019, or report why it cannot run
pub fn do_advent_of_code(day: i64) {
    TABLE.run(day)
}
