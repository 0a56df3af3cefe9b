// ⌨️ Filter Prompt - interactive city/month/day selection
// Re-prompts until a valid city arrives; bad month/day values downgrade
// to "all" with a notice instead of blocking the user.

use crate::filters::{DayFilter, FilterSelection, MonthFilter};
use crate::registry::City;
use crate::RULE;
use anyhow::{bail, Result};
use std::io::{BufRead, Write};

/// Ask for a comma-separated "city, month, day" line until the city is
/// valid. Generic over the streams so tests can drive it with buffers.
pub fn get_filters<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<FilterSelection> {
    writeln!(out, "Hello! Let's explore some US bikeshare data!")?;

    loop {
        write!(
            out,
            "Enter the city, month, and day separated by commas (e.g., Washington, January, Monday): "
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input ended while waiting for a filter selection");
        }
        let line = line.trim().to_lowercase();

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            writeln!(
                out,
                "Please provide all three values (city, month, day) separated by commas."
            )?;
            continue;
        }

        let Some(city) = City::parse(fields[0]) else {
            writeln!(out, "Invalid city input. Please enter a valid city.")?;
            continue;
        };

        let month = match MonthFilter::parse(fields[1]) {
            Some(month) => month,
            None => {
                writeln!(out, "Invalid month input. Applying no month filter.")?;
                MonthFilter::All
            }
        };

        let day = match DayFilter::parse(fields[2]) {
            Some(day) => day,
            None => {
                writeln!(out, "Invalid day input. Applying no day filter.")?;
                DayFilter::All
            }
        };

        let selection = FilterSelection { city, month, day };
        writeln!(out, "{}", selection)?;
        writeln!(out, "{}", RULE)?;
        return Ok(selection);
    }
}

/// Print `prompt` and read one line; only an exact "yes" (any case) counts.
/// End of input reads as a "no".
pub fn read_yes<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("yes"))
}

// ============================================================================
// TESTS
// ============================================================================
