//! Output formatting for the year listing

use aoc_dispatch::{Calendar, YearTable};
use std::io::{self, Write};

/// Write every registered year followed by its day titles
pub fn write_listing<W: Write>(calendar: &Calendar, out: &mut W) -> io::Result<()> {
    if calendar.is_empty() {
        writeln!(out, "No years registered.")?;
        return Ok(());
    }
    for table in calendar.tables() {
        write_year(table, out)?;
    }
    Ok(())
}

fn write_year<W: Write>(table: &YearTable, out: &mut W) -> io::Result<()> {
    let noun = if table.len() == 1 { "day" } else { "days" };
    writeln!(out, "{} ({} {})", table.year(), table.len(), noun)?;
    for (day, title) in table.titles() {
        writeln!(out, "  {:02}  {}", day, title)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_dispatch::CalendarBuilder;

    #[test]
    fn test_listing_format() {
        let calendar = CalendarBuilder::new()
            .register_year_plugins(|plugin| plugin.year == 2015)
            .unwrap()
            .build();

        let mut out = Vec::new();
        write_listing(&calendar, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("2015 (10 days)"));
        assert_eq!(lines.next(), Some("  01  Not Quite Lisp"));
        assert_eq!(lines.last(), Some("  10  Elves Look, Elves Say"));
    }

    #[test]
    fn test_empty_listing() {
        let calendar = CalendarBuilder::new().build();
        let mut out = Vec::new();
        write_listing(&calendar, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No years registered.\n");
    }
}
