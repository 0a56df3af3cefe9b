// 📂 Data Loader - CSV → filtered Trip Table
// One pass per query cycle: read, type, filter, done.

use crate::filters::FilterSelection;
use crate::model::{RawTrip, Trip, TripTable, BIRTH_YEAR_COLUMN, GENDER_COLUMN};
use crate::registry::DatasetRegistry;
use anyhow::{Context, Result};
use std::path::Path;

/// Load the selected city's dataset and keep only the rows matching the
/// month/day filters. Row order is preserved.
///
/// Fatal on a missing or unreadable file, a row missing a required column,
/// or an unparseable start timestamp. The error names the file and row.
pub fn load_table(registry: &DatasetRegistry, selection: &FilterSelection) -> Result<TripTable> {
    let path = registry.path_for(selection.city);
    load_filtered(path, selection)
}

fn load_filtered(path: &Path, selection: &FilterSelection) -> Result<TripTable> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;

    // Optional-column availability comes from the file itself, not from
    // any assumption about the city.
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .clone();
    let has_gender = headers.iter().any(|h| h == GENDER_COLUMN);
    let has_birth_year = headers.iter().any(|h| h == BIRTH_YEAR_COLUMN);

    let mut trips = Vec::new();
    for (index, row) in reader.deserialize::<RawTrip>().enumerate() {
        // Header is line 1, data starts at line 2
        let line = index + 2;
        let raw = row.with_context(|| format!("failed to read {} line {}", path.display(), line))?;
        let trip = Trip::from_raw(raw)
            .with_context(|| format!("invalid record at {} line {}", path.display(), line))?;

        if selection.month.matches(&trip) && selection.day.matches(&trip) {
            trips.push(trip);
        }
    }

    Ok(TripTable {
        trips,
        has_gender,
        has_birth_year,
    })
}

// ============================================================================
// TESTS
// ============================================================================
