// 📅 Filter Vocabulary - month/day restrictions and the filter selection
// "all" disables a dimension; anything else must name a month or weekday.

use crate::model::Trip;
use crate::registry::City;
use chrono::{Month, Weekday};
use std::fmt;

// ============================================================================
// MONTH FILTER
// ============================================================================

/// MonthFilter - restrict trips to one calendar month, or keep them all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Parse a user-supplied month name ("june", "All", ...). Returns None
    /// for anything that is neither "all" nor a month name.
    pub fn parse(input: &str) -> Option<MonthFilter> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return Some(MonthFilter::All);
        }
        input.parse::<Month>().ok().map(MonthFilter::Only)
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(month) => trip.month() == month.number_from_month(),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => write!(f, "all"),
            MonthFilter::Only(month) => write!(f, "{}", month.name()),
        }
    }
}

// ============================================================================
// DAY FILTER
// ============================================================================

/// DayFilter - restrict trips to one weekday, or keep them all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Parse a user-supplied weekday name ("monday", "Mon", ...). Returns
    /// None for anything that is neither "all" nor a weekday name.
    pub fn parse(input: &str) -> Option<DayFilter> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("all") {
            return Some(DayFilter::All);
        }
        input.parse::<Weekday>().ok().map(DayFilter::Only)
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(day) => trip.weekday() == *day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => write!(f, "all"),
            DayFilter::Only(day) => write!(f, "{}", day_name(*day)),
        }
    }
}

/// Full English weekday name (chrono's Display abbreviates)
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// ============================================================================
// FILTER SELECTION
// ============================================================================

/// FilterSelection - one validated (city, month, day) triple
///
/// Created per loop iteration by the prompt, consumed once by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "City: {}, Month: {}, Day: {}",
            self.city, self.month, self.day
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
