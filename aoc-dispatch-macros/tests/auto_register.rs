//! Tests for `#[derive(AdventYear)]` plugin registration

use aoc_dispatch::{AdventYear, CalendarBuilder, Year, YearPlugin, YearTable, year_table};

year_table! {
    static TABLE_2020 for 2020 = [
        "Report Repair" => |_: &str| {},
        "Password Philosophy" => |_: &str| {},
        "Toboggan Trajectory" => |_: &str| {},
    ];
}

year_table! {
    static TABLE_2021 for 2021 = [
        "Sonar Sweep" => |_: &str| {},
    ];
}

#[derive(AdventYear)]
#[aoc(year = 2020, tags = ["test", "travel"])]
struct Year2020;

impl Year for Year2020 {
    fn table(&self) -> &'static YearTable {
        &TABLE_2020
    }
}

#[derive(AdventYear)]
#[aoc(year = 2021)]
struct Year2021;

impl Year for Year2021 {
    fn table(&self) -> &'static YearTable {
        &TABLE_2021
    }
}

#[test]
fn test_derived_years_are_collected() {
    let years: Vec<u16> = aoc_dispatch::inventory::iter::<YearPlugin>()
        .map(|plugin| plugin.year)
        .collect();
    assert!(years.contains(&2020));
    assert!(years.contains(&2021));
}

#[test]
fn test_tags_are_carried() {
    let plugin = aoc_dispatch::inventory::iter::<YearPlugin>()
        .find(|plugin| plugin.year == 2020)
        .unwrap();
    assert_eq!(plugin.tags, &["test", "travel"]);

    let plugin = aoc_dispatch::inventory::iter::<YearPlugin>()
        .find(|plugin| plugin.year == 2021)
        .unwrap();
    assert!(plugin.tags.is_empty());
}

#[test]
fn test_register_all_plugins() {
    let calendar = CalendarBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert_eq!(calendar.years().collect::<Vec<_>>(), vec![2020, 2021]);
    assert_eq!(calendar.year(2020).unwrap().len(), 3);
    assert_eq!(
        calendar.year(2020).unwrap().get(2).unwrap().title(),
        "Password Philosophy"
    );
}

#[test]
fn test_register_filtered_plugins() {
    let calendar = CalendarBuilder::new()
        .register_year_plugins(|plugin| plugin.tags.contains(&"travel"))
        .unwrap()
        .build();

    assert_eq!(calendar.years().collect::<Vec<_>>(), vec![2020]);
}
