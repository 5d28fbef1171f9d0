//! Paginated raw-data viewer.
//!
//! Walks the complete rows of the table in file order, five at a time.
//! The control structure is deliberate: an answer other than `"yes"` or
//! `"no"` prints a guidance line and still advances to the next row
//! without printing it, and the checkpoint prompt fires after every
//! fifth visited row. Answers are matched exactly.

use std::io::{self, Write};

use bikeshare_dataset::TripDataset;
use bikeshare_trip_models::{TripRecord, TripSchema};

const VIEW_PROMPT: &str = "Do you want to see the raw data? yes/no";
const MORE_PROMPT: &str = "Would you like to see more raw data? yes/no";
const GUIDANCE: &str = "Please, refer as mentioned";

/// Rows shown between checkpoint prompts.
const PAGE_SIZE: usize = 5;

/// Pages through the dataset's complete rows on demand.
///
/// # Errors
///
/// Returns an error if the prompt backend or the output sink fails.
pub fn view_raw_data(
    dataset: &TripDataset,
    ask: &mut dyn FnMut(&str) -> io::Result<String>,
    out: &mut dyn Write,
) -> io::Result<()> {
    let schema = dataset.schema();
    let mut answer = ask(VIEW_PROMPT)?;
    let mut row_count: usize = 0;

    for row in dataset.complete_rows() {
        if answer == "no" {
            break;
        } else if answer == "yes" {
            print_row(out, row, schema)?;
        } else {
            writeln!(out, "{GUIDANCE}")?;
        }

        row_count += 1;
        if row_count % PAGE_SIZE == 0 {
            answer = ask(MORE_PROMPT)?;
            if answer == "no" {
                break;
            }
        }
    }

    Ok(())
}

/// Prints one row as a label/value listing, one field per line.
///
/// Columns absent from the schema are omitted, matching the table the
/// row was loaded from.
fn print_row(out: &mut dyn Write, row: &TripRecord, schema: TripSchema) -> io::Result<()> {
    if let Some(start_time) = row.start_time {
        writeln!(out, "{:<14} {start_time}", "Start Time")?;
    }
    if let Some(station) = row.start_station.as_deref() {
        writeln!(out, "{:<14} {station}", "Start Station")?;
    }
    if let Some(station) = row.end_station.as_deref() {
        writeln!(out, "{:<14} {station}", "End Station")?;
    }
    if let Some(duration) = row.trip_duration {
        writeln!(out, "{:<14} {duration}", "Trip Duration")?;
    }
    if schema.has_user_type
        && let Some(user_type) = row.user_type.as_deref()
    {
        writeln!(out, "{:<14} {user_type}", "User Type")?;
    }
    if schema.has_gender
        && let Some(gender) = row.gender.as_deref()
    {
        writeln!(out, "{:<14} {gender}", "Gender")?;
    }
    if schema.has_birth_year
        && let Some(birth_year) = row.birth_year
    {
        writeln!(out, "{:<14} {birth_year}", "Birth Year")?;
    }
    if let Some(month) = row.start_month {
        writeln!(out, "{:<14} {}", "Start Month", month.number())?;
    }
    if let Some(day) = row.start_day {
        writeln!(out, "{:<14} {}", "Start Day", day.index())?;
    }
    if let Some(hour) = row.start_hour {
        writeln!(out, "{:<14} {hour}", "Start Hour")?;
    }
    writeln!(out)
}
