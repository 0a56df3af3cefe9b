// 🚲 Trip Records - raw CSV rows and the typed Trip Table
// Raw rows come straight from serde; typed trips carry the parsed
// timestamp, and month/weekday/hour derive from it.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;
use std::fmt;

/// Timestamp format used by the city exports ("2017-01-01 00:07:57")
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Headers of the demographic columns that only some cities export
pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

// ============================================================================
// RAW ROW
// ============================================================================

/// RawTrip - the serde view of one CSV row
///
/// Field names mirror the export headers. The files carry extra columns
/// (a leading unnamed index, "End Time") which are simply not mapped here.
/// Birth years arrive float-formatted ("1992.0"), so the field stays a
/// string until conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,

    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,

    #[serde(rename = "Start Station")]
    pub start_station: String,

    #[serde(rename = "End Station")]
    pub end_station: String,

    #[serde(rename = "User Type")]
    pub user_type: String,

    #[serde(rename = "Gender")]
    pub gender: Option<String>,

    #[serde(rename = "Birth Year")]
    pub birth_year: Option<String>,
}

// ============================================================================
// TYPED TRIP
// ============================================================================

/// Trip - one validated trip record
#[derive(Debug, Clone)]
pub struct Trip {
    /// Parsed once at load; month/weekday/hour derive from this
    pub start_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub duration_secs: f64,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl Trip {
    /// Convert a raw row, parsing the start timestamp. Fails on an
    /// unparseable timestamp; a malformed birth-year cell becomes an
    /// absent value instead.
    pub fn from_raw(raw: RawTrip) -> Result<Trip> {
        let start_time = NaiveDateTime::parse_from_str(raw.start_time.trim(), START_TIME_FORMAT)
            .with_context(|| format!("unparseable start time {:?}", raw.start_time))?;

        Ok(Trip {
            start_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            duration_secs: raw.trip_duration,
            user_type: raw.user_type,
            gender: raw.gender.filter(|g| !g.trim().is_empty()),
            birth_year: raw.birth_year.as_deref().and_then(parse_birth_year),
        })
    }

    /// Calendar month of the start time (1-12)
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Weekday of the start time
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Hour of the start time (0-23)
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:>7.0}s  {} -> {}  [{}]",
            self.start_time.format(START_TIME_FORMAT),
            self.duration_secs,
            self.start_station,
            self.end_station,
            if self.user_type.is_empty() { "-" } else { &self.user_type },
        )?;
        if let Some(gender) = &self.gender {
            write!(f, " {}", gender)?;
        }
        if let Some(year) = self.birth_year {
            write!(f, " b.{}", year)?;
        }
        Ok(())
    }
}

/// Accept "1992", "1992.0", and surrounding whitespace. Anything else is
/// treated as an absent value rather than an error.
fn parse_birth_year(value: &str) -> Option<i32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|y| y.is_finite())
        .map(|y| y as i32)
}

// ============================================================================
// TRIP TABLE
// ============================================================================

/// TripTable - the in-memory table for one query cycle
///
/// The presence flags are read from the loaded file's header row, so
/// reporters branch on what the data actually contains.
#[derive(Debug, Clone)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Slice of up to `size` trips starting at `offset`. Out-of-range
    /// offsets yield an empty slice, never a panic.
    pub fn page(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}

// ============================================================================
// TESTS
// ============================================================================
