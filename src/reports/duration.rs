// ⏱️ Trip Duration Reporter - total and mean travel time

use super::timed_section;
use crate::model::TripTable;
use anyhow::Result;
use std::io::Write;

/// DurationStats - aggregate travel time over the filtered table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub trips: usize,
    pub total_secs: f64,
    /// None for an empty table; a mean of nothing is undefined
    pub mean_secs: Option<f64>,
}

impl DurationStats {
    pub fn compute(table: &TripTable) -> DurationStats {
        let total_secs: f64 = table.trips.iter().map(|trip| trip.duration_secs).sum();
        let mean_secs = if table.is_empty() {
            None
        } else {
            Some(total_secs / table.len() as f64)
        };
        DurationStats {
            trips: table.len(),
            total_secs,
            mean_secs,
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "Total travel time across {} trips: {} seconds",
            self.trips, self.total_secs
        )?;
        match self.mean_secs {
            Some(mean) => writeln!(out, "Mean travel time: {:.2} seconds", mean)?,
            None => writeln!(out, "Mean travel time: not available (no trips matched)")?,
        }
        Ok(())
    }
}

/// Print the full trip-duration section, elapsed time included
pub fn report<W: Write>(table: &TripTable, out: &mut W) -> Result<()> {
    timed_section(out, "Calculating Trip Duration...", |out| {
        DurationStats::compute(table).render(out)
    })
}

// ============================================================================
// TESTS
// ============================================================================
