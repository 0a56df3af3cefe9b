// 📊 Statistics Reporters - four stateless report generators
// Each submodule owns one section: typed stats struct, compute, render.
// Shared aggregation helpers live here.

pub mod duration;
pub mod stations;
pub mod time;
pub mod users;

pub use duration::DurationStats;
pub use stations::StationStats;
pub use time::TimeStats;
pub use users::{BirthYearStats, UserStats};

use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;
use std::time::Instant;

pub(crate) const NO_TRIPS_MESSAGE: &str = "No trips matched the selected filters.";

/// Most frequent value in `values`. Ties break toward the smallest value,
/// which the ascending map iteration guarantees.
pub(crate) fn mode<T, I>(values: I) -> Option<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        let better = match &best {
            None => true,
            Some((_, best_count)) => count > *best_count,
        };
        if better {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value)
}

/// Frequency counts sorted by count descending; names sort ascending within
/// a tied count (the stable sort preserves the map's name order).
pub(crate) fn value_counts<I, S>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value.into()).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

/// Print a section banner, run the body, then print the elapsed wall time
/// and a closing rule. All four reporters report through this.
pub(crate) fn timed_section<W, F>(out: &mut W, title: &str, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    writeln!(out, "\n{}\n", title)?;
    let started = Instant::now();
    body(&mut *out)?;
    writeln!(out, "\nThis took {:.4} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", crate::RULE)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode([3u32, 1, 3, 2, 3]), Some(3));
    }

    #[test]
    fn test_mode_tie_breaks_to_smallest() {
        assert_eq!(mode([7u32, 2, 7, 2]), Some(2));
        assert_eq!(mode([5u32]), Some(5));
    }

    #[test]
    fn test_mode_of_nothing() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_value_counts_orders_by_count_then_name() {
        let counts = value_counts(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(
            counts,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_value_counts_tied_counts_sort_by_name() {
        let counts = value_counts(["z", "m", "a"]);
        assert_eq!(
            counts,
            vec![
                ("a".to_string(), 1),
                ("m".to_string(), 1),
                ("z".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_value_counts_sum_equals_input_len() {
        let input = ["x", "y", "x", "x", "y", "z", "z"];
        let counts = value_counts(input);
        let total: usize = counts.iter().map(|(_, c)| c).sum();
        assert_eq!(total, input.len());
    }
}
