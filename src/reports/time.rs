// ⏰ Time-of-Travel Reporter - most frequent start month, weekday, and hour

use super::{mode, timed_section, NO_TRIPS_MESSAGE};
use crate::filters::day_name;
use crate::model::{Trip, TripTable};
use anyhow::Result;
use chrono::{Month, Weekday};
use std::io::Write;

/// TimeStats - the three most popular travel times over the filtered table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub popular_month: Month,
    pub popular_day: Weekday,
    pub popular_hour: u32,
}

impl TimeStats {
    /// None when the table is empty (a mode of nothing is undefined).
    /// Ties break toward the smallest value: calendar order for months,
    /// Monday-first for weekdays, 0-23 for hours.
    pub fn compute(table: &TripTable) -> Option<TimeStats> {
        if table.is_empty() {
            return None;
        }

        let popular_month =
            mode(table.trips.iter().map(Trip::month)).and_then(month_from_number)?;
        let popular_day = mode(
            table
                .trips
                .iter()
                .map(|trip| trip.weekday().num_days_from_monday()),
        )
        .and_then(weekday_from_index)?;
        let popular_hour = mode(table.trips.iter().map(Trip::hour))?;

        Some(TimeStats {
            popular_month,
            popular_day,
            popular_hour,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Most Popular Start Month: {}", self.popular_month.name())?;
        writeln!(out, "Most Popular Start Day: {}", day_name(self.popular_day))?;
        writeln!(out, "Most Popular Start Hour: {}", self.popular_hour)?;
        Ok(())
    }
}

/// Print the full time-of-travel section, elapsed time included
pub fn report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    timed_section(
        out,
        "Calculating The Most Frequent Times of Travel...",
        |out| match TimeStats::compute(table) {
            Some(stats) => stats.render(out),
            None => {
                writeln!(out, "{}", NO_TRIPS_MESSAGE)?;
                Ok(())
            }
        },
    )
}

fn month_from_number(number: u32) -> Option<Month> {
    match number {
        1 => Some(Month::January),
        2 => Some(Month::February),
        3 => Some(Month::March),
        4 => Some(Month::April),
        5 => Some(Month::May),
        6 => Some(Month::June),
        7 => Some(Month::July),
        8 => Some(Month::August),
        9 => Some(Month::September),
        10 => Some(Month::October),
        11 => Some(Month::November),
        12 => Some(Month::December),
        _ => None,
    }
}

fn weekday_from_index(days_from_monday: u32) -> Option<Weekday> {
    match days_from_monday {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawTrip;

    fn table_of(start_times: &[&str]) -> TripTable {
        let trips = start_times
            .iter()
            .map(|start_time| {
                Trip::from_raw(RawTrip {
                    start_time: start_time.to_string(),
                    trip_duration: 60.0,
                    start_station: "A".to_string(),
                    end_station: "B".to_string(),
                    user_type: "Subscriber".to_string(),
                    gender: None,
                    birth_year: None,
                })
                .unwrap()
            })
            .collect();
        TripTable {
            trips,
            has_gender: false,
            has_birth_year: false,
        }
    }

    #[test]
    fn test_popular_times_come_from_the_table() {
        // Two June Mondays at 09:00, one May Tuesday at 17:00
        let table = table_of(&[
            "2017-06-05 09:10:00",
            "2017-06-12 09:45:00",
            "2017-05-02 17:00:00",
        ]);
        let stats = TimeStats::compute(&table).unwrap();
        assert_eq!(stats.popular_month, Month::June);
        assert_eq!(stats.popular_day, Weekday::Mon);
        assert_eq!(stats.popular_hour, 9);
    }

    #[test]
    fn test_ties_break_to_smallest_value() {
        // One trip each: May Tuesday 08:00 and June Monday 17:00.
        // Month tie -> May, day tie -> Monday, hour tie -> 8.
        let table = table_of(&["2017-05-02 08:00:00", "2017-06-05 17:00:00"]);
        let stats = TimeStats::compute(&table).unwrap();
        assert_eq!(stats.popular_month, Month::May);
        assert_eq!(stats.popular_day, Weekday::Mon);
        assert_eq!(stats.popular_hour, 8);
    }

    #[test]
    fn test_empty_table_has_no_stats() {
        assert_eq!(TimeStats::compute(&table_of(&[])), None);
    }

    #[test]
    fn test_report_prints_section_and_elapsed() {
        let table = table_of(&["2017-06-05 09:10:00"]);
        let mut out = Vec::new();
        report(&table, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Calculating The Most Frequent Times of Travel..."));
        assert!(output.contains("Most Popular Start Month: June"));
        assert!(output.contains("Most Popular Start Day: Monday"));
        assert!(output.contains("Most Popular Start Hour: 9"));
        assert!(output.contains("This took"));
    }
}
