// 🚉 Station Popularity Reporter - full frequency distributions for start
// stations, end stations, and (start, end) pairs

use super::{timed_section, value_counts, NO_TRIPS_MESSAGE};
use crate::model::TripTable;
use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;

/// StationStats - every distribution is complete, not just the top value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// (station, trips started there), busiest first
    pub start_counts: Vec<(String, usize)>,
    /// (station, trips ended there), busiest first
    pub end_counts: Vec<(String, usize)>,
    /// (start, end, count) grouped by start station; busiest pair first
    /// within each group
    pub pair_counts: Vec<(String, String, usize)>,
}

impl StationStats {
    pub fn compute(table: &TripTable) -> Option<StationStats> {
        if table.is_empty() {
            return None;
        }

        let start_counts =
            value_counts(table.trips.iter().map(|trip| trip.start_station.clone()));
        let end_counts = value_counts(table.trips.iter().map(|trip| trip.end_station.clone()));

        let mut pairs: BTreeMap<(String, String), usize> = BTreeMap::new();
        for trip in &table.trips {
            *pairs
                .entry((trip.start_station.clone(), trip.end_station.clone()))
                .or_insert(0) += 1;
        }
        let mut pair_counts: Vec<(String, String, usize)> = pairs
            .into_iter()
            .map(|((start, end), count)| (start, end, count))
            .collect();
        // Groups in start-station order; within a group, busiest first,
        // then end-station name
        pair_counts.sort_by(|a, b| a.0.cmp(&b.0).then(b.2.cmp(&a.2)).then(a.1.cmp(&b.1)));

        Some(StationStats {
            start_counts,
            end_counts,
            pair_counts,
        })
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Trip counts by start station:")?;
        for (station, count) in &self.start_counts {
            writeln!(out, "{:>7}  {}", count, station)?;
        }

        writeln!(out, "\nTrip counts by end station:")?;
        for (station, count) in &self.end_counts {
            writeln!(out, "{:>7}  {}", count, station)?;
        }

        writeln!(out, "\nTrip counts by start and end station:")?;
        for (start, end, count) in &self.pair_counts {
            writeln!(out, "{:>7}  {} -> {}", count, start, end)?;
        }
        Ok(())
    }
}

/// Print the full station-popularity section, elapsed time included
pub fn report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    timed_section(
        out,
        "Calculating The Most Popular Stations and Trip...",
        |out| match StationStats::compute(table) {
            Some(stats) => stats.render(out),
            None => {
                writeln!(out, "{}", NO_TRIPS_MESSAGE)?;
                Ok(())
            }
        },
    )
}

// ============================================================================
// TESTS
// ============================================================================
