// 📄 Row Viewer - paginated raw-trip display
// Five rows per page, advancing until the user stops answering "yes".

use crate::model::TripTable;
use crate::prompt::read_yes;
use anyhow::Result;
use std::io::{BufRead, Write};

pub const PAGE_SIZE: usize = 5;

/// Offer successive 5-row slices of the table. Both the initial prompt and
/// the continuation prompt must be answered "yes" to keep going. Pages past
/// the end of the table are empty, never an error.
pub fn view_trips<R: BufRead, W: Write>(
    table: &TripTable,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut offset = 0;
    loop {
        let wants_rows = read_yes(
            input,
            out,
            "Would you like to view 5 rows of individual trip data? Enter yes or no: ",
        )?;
        if !wants_rows {
            break;
        }

        let page = table.page(offset, PAGE_SIZE);
        for (i, trip) in page.iter().enumerate() {
            writeln!(out, "{:>6}  {}", offset + i, trip)?;
        }
        if page.is_empty() {
            writeln!(out, "(no more rows)")?;
        }
        offset += PAGE_SIZE;

        if !read_yes(input, out, "Do you wish to continue? Enter yes or no: ")? {
            break;
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
