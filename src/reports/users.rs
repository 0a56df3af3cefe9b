// 👥 User Demographics Reporter - user types, gender, birth years
// The demographic distributions only exist where the dataset carries the
// columns; elsewhere the report says so and moves on.

use super::{mode, timed_section, value_counts, NO_TRIPS_MESSAGE};
use crate::model::TripTable;
use anyhow::Result;
use std::io::Write;

/// BirthYearStats - earliest, most recent, and most common year of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

impl BirthYearStats {
    fn from_years(years: &[i32]) -> Option<BirthYearStats> {
        Some(BirthYearStats {
            earliest: *years.iter().min()?,
            most_recent: *years.iter().max()?,
            most_common: mode(years.iter().copied())?,
        })
    }
}

/// UserStats - demographics over the filtered table
///
/// The user-type distribution covers every row. Gender and birth-year
/// figures are None when the dataset lacks the column, or when the
/// filtered rows carry no values in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_type_counts: Vec<(String, usize)>,
    pub gender_counts: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    pub fn compute(table: &TripTable) -> UserStats {
        let user_type_counts = value_counts(table.trips.iter().map(|trip| {
            if trip.user_type.is_empty() {
                "(not given)".to_string()
            } else {
                trip.user_type.clone()
            }
        }));

        let gender_counts = if table.has_gender {
            Some(value_counts(
                table.trips.iter().filter_map(|trip| trip.gender.clone()),
            ))
        } else {
            None
        };

        let birth_years = if table.has_birth_year {
            let years: Vec<i32> = table.trips.iter().filter_map(|trip| trip.birth_year).collect();
            BirthYearStats::from_years(&years)
        } else {
            None
        };

        UserStats {
            user_type_counts,
            gender_counts,
            birth_years,
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Trip counts by user type:")?;
        for (user_type, count) in &self.user_type_counts {
            writeln!(out, "{:>7}  {}", count, user_type)?;
        }

        match &self.gender_counts {
            Some(counts) => {
                writeln!(out, "\nTrip counts by gender:")?;
                for (gender, count) in counts {
                    writeln!(out, "{:>7}  {}", count, gender)?;
                }
            }
            None => writeln!(out, "\nGender counts are not available for this dataset.")?,
        }

        match &self.birth_years {
            Some(stats) => {
                writeln!(out, "\nEarliest year of birth: {}", stats.earliest)?;
                writeln!(out, "Most recent year of birth: {}", stats.most_recent)?;
                writeln!(out, "Most common year of birth: {}", stats.most_common)?;
            }
            None => writeln!(out, "Birth year stats are not available for this dataset.")?,
        }
        Ok(())
    }
}

/// Print the full user-demographics section, elapsed time included
pub fn report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    timed_section(out, "Calculating User Stats...", |out| {
        if table.is_empty() {
            writeln!(out, "{}", NO_TRIPS_MESSAGE)?;
            return Ok(());
        }
        UserStats::compute(table).render(out)
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawTrip, Trip};

    struct Rider {
        user_type: &'static str,
        gender: Option<&'static str>,
        birth_year: Option<&'static str>,
    }

    fn table_of(riders: &[Rider], has_gender: bool, has_birth_year: bool) -> TripTable {
        let trips = riders
            .iter()
            .map(|rider| {
                Trip::from_raw(RawTrip {
                    start_time: "2017-06-05 09:10:00".to_string(),
                    trip_duration: 60.0,
                    start_station: "A".to_string(),
                    end_station: "B".to_string(),
                    user_type: rider.user_type.to_string(),
                    gender: rider.gender.map(str::to_string),
                    birth_year: rider.birth_year.map(str::to_string),
                })
                .unwrap()
            })
            .collect();
        TripTable {
            trips,
            has_gender,
            has_birth_year,
        }
    }

    #[test]
    fn test_user_type_counts_cover_every_row() {
        let table = table_of(
            &[
                Rider { user_type: "Subscriber", gender: None, birth_year: None },
                Rider { user_type: "Customer", gender: None, birth_year: None },
                Rider { user_type: "Subscriber", gender: None, birth_year: None },
                Rider { user_type: "", gender: None, birth_year: None },
            ],
            false,
            false,
        );
        let stats = UserStats::compute(&table);

        let total: usize = stats.user_type_counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, table.len());
        assert_eq!(stats.user_type_counts[0], ("Subscriber".to_string(), 2));
        assert!(stats
            .user_type_counts
            .iter()
            .any(|(label, _)| label == "(not given)"));
    }

    #[test]
    fn test_missing_columns_yield_no_demographics() {
        let table = table_of(
            &[Rider { user_type: "Subscriber", gender: None, birth_year: None }],
            false,
            false,
        );
        let stats = UserStats::compute(&table);
        assert_eq!(stats.gender_counts, None);
        assert_eq!(stats.birth_years, None);

        let mut out = Vec::new();
        stats.render(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Gender counts are not available"));
        assert!(output.contains("Birth year stats are not available"));
    }

    #[test]
    fn test_gender_counts_skip_blank_cells() {
        let table = table_of(
            &[
                Rider { user_type: "Subscriber", gender: Some("Male"), birth_year: None },
                Rider { user_type: "Subscriber", gender: Some("Female"), birth_year: None },
                Rider { user_type: "Customer", gender: None, birth_year: None },
                Rider { user_type: "Subscriber", gender: Some("Female"), birth_year: None },
            ],
            true,
            false,
        );
        let stats = UserStats::compute(&table);
        assert_eq!(
            stats.gender_counts,
            Some(vec![
                ("Female".to_string(), 2),
                ("Male".to_string(), 1),
            ])
        );
    }

    #[test]
    fn test_birth_year_stats_and_tie_break() {
        let table = table_of(
            &[
                Rider { user_type: "Subscriber", gender: None, birth_year: Some("1989.0") },
                Rider { user_type: "Subscriber", gender: None, birth_year: Some("1992.0") },
                Rider { user_type: "Customer", gender: None, birth_year: Some("1975.0") },
                Rider { user_type: "Subscriber", gender: None, birth_year: None },
            ],
            false,
            true,
        );
        let stats = UserStats::compute(&table).birth_years.unwrap();
        assert_eq!(stats.earliest, 1975);
        assert_eq!(stats.most_recent, 1992);
        // Every year appears once; the tie resolves to the smallest
        assert_eq!(stats.most_common, 1975);
    }

    #[test]
    fn test_birth_year_column_present_but_empty() {
        let table = table_of(
            &[Rider { user_type: "Subscriber", gender: None, birth_year: None }],
            false,
            true,
        );
        assert_eq!(UserStats::compute(&table).birth_years, None);
    }

    #[test]
    fn test_report_on_washington_style_table() {
        let table = table_of(
            &[
                Rider { user_type: "Subscriber", gender: None, birth_year: None },
                Rider { user_type: "Customer", gender: None, birth_year: None },
            ],
            false,
            false,
        );
        let mut out = Vec::new();
        report(&table, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Calculating User Stats..."));
        assert!(output.contains("Subscriber"));
        assert!(output.contains("not available"));
        assert!(output.contains("This took"));
    }
}
