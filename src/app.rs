// 🔁 Run Loop - one full explore cycle, then offer a restart
// prompt → load → view → four reports in fixed order. Loader failures
// propagate out; prompt mistakes never do.

use crate::loader;
use crate::prompt::{get_filters, read_yes};
use crate::registry::DatasetRegistry;
use crate::reports;
use crate::viewer;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Drive explore cycles until the user declines a restart. Generic over
/// the streams so the whole loop runs under test on in-memory buffers.
pub fn run<R: BufRead, W: Write>(
    registry: &DatasetRegistry,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let selection = get_filters(input, out)?;
        let table = loader::load_table(registry, &selection)?;

        viewer::view_trips(&table, input, out)?;

        reports::time::report(&table, out)?;
        reports::stations::report(&table, out)?;
        reports::duration::report(&table, out)?;
        reports::users::report(&table, out)?;

        if !read_yes(input, out, "\nWould you like to restart? Enter yes or no.\n")? {
            break;
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
