#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Trip dataset loading.
//!
//! Reads a city's CSV file fully into memory, checks that the required
//! columns are present, parses timestamps, and computes the derived start
//! month/weekday/hour columns. The month/day selectors from the user's
//! [`FilterSelection`] are carried through the interface but the table is
//! not narrowed by them.

pub mod parsing;
pub mod progress;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bikeshare_trip_models::{City, FilterSelection, TripRecord, TripSchema};
use serde::Deserialize;

use crate::progress::ProgressCallback;

/// Header name of the trip start timestamp column.
pub const COL_START_TIME: &str = "Start Time";
/// Header name of the start station column.
pub const COL_START_STATION: &str = "Start Station";
/// Header name of the end station column.
pub const COL_END_STATION: &str = "End Station";
/// Header name of the trip duration column (seconds).
pub const COL_TRIP_DURATION: &str = "Trip Duration";
/// Header name of the optional user type column.
pub const COL_USER_TYPE: &str = "User Type";
/// Header name of the optional gender column.
pub const COL_GENDER: &str = "Gender";
/// Header name of the optional birth year column.
pub const COL_BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_START_TIME,
    COL_START_STATION,
    COL_END_STATION,
    COL_TRIP_DURATION,
];

/// Errors that can occur while loading a trip dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the file header.
    #[error("{file} is missing required column '{column}'")]
    MissingColumn {
        /// Data file being loaded.
        file: String,
        /// The absent column.
        column: String,
    },

    /// A non-empty `Start Time` cell could not be parsed.
    #[error("unparseable Start Time value '{value}'")]
    Timestamp {
        /// The offending cell contents.
        value: String,
    },
}

/// One CSV row as it appears on disk, before normalization.
///
/// The demographic columns default to `None` so files that omit them
/// entirely (Washington) still deserialize.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: Option<String>,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(default, rename = "User Type")]
    user_type: Option<String>,
    #[serde(default, rename = "Gender")]
    gender: Option<String>,
    #[serde(default, rename = "Birth Year")]
    birth_year: Option<f64>,
}

/// A fully loaded, in-memory trip table for one city.
///
/// Immutable after loading; each session iteration loads its own.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDataset {
    city: City,
    schema: TripSchema,
    rows: Vec<TripRecord>,
}

impl TripDataset {
    /// Builds a table from already-normalized rows.
    #[must_use]
    pub const fn new(city: City, schema: TripSchema, rows: Vec<TripRecord>) -> Self {
        Self { city, schema, rows }
    }

    /// The city this table was loaded for.
    #[must_use]
    pub const fn city(&self) -> City {
        self.city
    }

    /// Which optional columns the file header carried.
    #[must_use]
    pub const fn schema(&self) -> TripSchema {
        self.schema
    }

    /// All rows, in file order.
    #[must_use]
    pub fn rows(&self) -> &[TripRecord] {
        &self.rows
    }

    /// Number of rows in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose schema-present fields are all populated, in file order.
    ///
    /// This is the view the raw-data viewer paginates over.
    pub fn complete_rows(&self) -> impl Iterator<Item = &TripRecord> {
        let schema = self.schema;
        self.rows.iter().filter(move |row| row.is_complete(schema))
    }
}

/// Returns the path of `city`'s data file under `data_dir`.
#[must_use]
pub fn data_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.data_file())
}

/// Loads the full dataset for the selected city.
///
/// The month and day selectors in `selection` are accepted for interface
/// symmetry but are not applied to narrow the table.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file is missing, a required column is
/// absent, or a row fails to parse.
pub fn load(
    selection: &FilterSelection,
    data_dir: &Path,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<TripDataset, DatasetError> {
    let path = data_path(data_dir, selection.city);
    log::info!("Loading {} dataset from {}", selection.city, path.display());

    let file = File::open(&path)?;
    from_reader(selection.city, BufReader::new(file), progress)
}

/// Loads a trip dataset from any CSV byte stream.
///
/// # Errors
///
/// Returns [`DatasetError`] if a required column is absent from the
/// header or a row fails to parse.
pub fn from_reader<R: Read>(
    city: City,
    reader: R,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<TripDataset, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for &column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DatasetError::MissingColumn {
                file: city.data_file().to_string(),
                column: column.to_string(),
            });
        }
    }

    let schema = TripSchema {
        has_user_type: headers.iter().any(|header| header == COL_USER_TYPE),
        has_gender: headers.iter().any(|header| header == COL_GENDER),
        has_birth_year: headers.iter().any(|header| header == COL_BIRTH_YEAR),
    };

    let mut rows = Vec::new();
    for result in csv_reader.deserialize::<RawTrip>() {
        let raw = result?;

        // Empty cells are missing; non-empty cells must parse.
        let start_time = match raw.start_time {
            None => None,
            Some(value) => Some(
                parsing::parse_trip_timestamp(&value)
                    .ok_or(DatasetError::Timestamp { value })?,
            ),
        };

        rows.push(TripRecord::new(
            start_time,
            raw.start_station,
            raw.end_station,
            raw.trip_duration,
            raw.user_type,
            raw.gender,
            raw.birth_year,
        ));
        progress.inc(1);
    }

    log::debug!("Loaded {} trips for {city}", rows.len());

    Ok(TripDataset { city, schema, rows })
}

#[cfg(test)]
mod tests {
    use bikeshare_trip_models::{DayFilter, Month, MonthFilter, Weekday};

    use super::progress::null_progress;
    use super::*;

    const FULL_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-03-01 09:07:57,2017-03-01 09:20:53,776,Columbus Dr,Clinton St,Subscriber,Male,1992.0
2017-03-02 10:00:00,2017-03-02 10:05:00,300,State St,Clinton St,Customer,,
2017-05-04 23:59:59,2017-05-05 00:10:00,,Columbus Dr,State St,Subscriber,Female,1984.0
";

    const WASHINGTON_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 00:07:57,2017-01-02 00:20:53,776.0,14th & Belmont,15th & P,Subscriber
";

    fn parse(csv: &str) -> TripDataset {
        from_reader(City::Chicago, csv.as_bytes(), &null_progress()).unwrap()
    }

    #[test]
    fn loads_rows_in_file_order() {
        let dataset = parse(FULL_CSV);
        assert_eq!(dataset.len(), 3);
        assert_eq!(
            dataset.rows()[0].start_station.as_deref(),
            Some("Columbus Dr")
        );
        assert_eq!(dataset.rows()[1].start_station.as_deref(), Some("State St"));
    }

    #[test]
    fn derives_start_columns() {
        let dataset = parse(FULL_CSV);
        let first = &dataset.rows()[0];
        assert_eq!(first.start_month, Some(Month::March));
        assert_eq!(first.start_day, Some(Weekday::Wednesday));
        assert_eq!(first.start_hour, Some(9));
    }

    #[test]
    fn empty_cells_become_missing_values() {
        let dataset = parse(FULL_CSV);
        let second = &dataset.rows()[1];
        assert_eq!(second.gender, None);
        assert_eq!(second.birth_year, None);
        let third = &dataset.rows()[2];
        assert_eq!(third.trip_duration, None);
    }

    #[test]
    fn detects_optional_columns_in_schema() {
        let full = parse(FULL_CSV);
        assert!(full.schema().has_user_type);
        assert!(full.schema().has_gender);
        assert!(full.schema().has_birth_year);

        let washington =
            from_reader(City::Washington, WASHINGTON_CSV.as_bytes(), &null_progress()).unwrap();
        assert!(washington.schema().has_user_type);
        assert!(!washington.schema().has_gender);
        assert!(!washington.schema().has_birth_year);
        assert_eq!(washington.rows()[0].gender, None);
    }

    #[test]
    fn rejects_missing_required_column() {
        let csv = "Start Time,Start Station,End Station\n2017-01-01 00:00:00,A,B\n";
        let err = from_reader(City::Chicago, csv.as_bytes(), &null_progress()).unwrap_err();
        match err {
            DatasetError::MissingColumn { column, .. } => {
                assert_eq!(column, COL_TRIP_DURATION);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unparseable_timestamp() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station
garbage,100,A,B
";
        let err = from_reader(City::Chicago, csv.as_bytes(), &null_progress()).unwrap_err();
        match err {
            DatasetError::Timestamp { value } => assert_eq!(value, "garbage"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn complete_rows_respect_schema() {
        // Row 2 lacks gender/birth year, row 3 lacks a duration.
        let full = parse(FULL_CSV);
        let complete: Vec<_> = full.complete_rows().collect();
        assert_eq!(complete.len(), 1);
        assert_eq!(complete[0].start_station.as_deref(), Some("Columbus Dr"));

        // Washington's absent columns do not count against completeness.
        let washington =
            from_reader(City::Washington, WASHINGTON_CSV.as_bytes(), &null_progress()).unwrap();
        assert_eq!(washington.complete_rows().count(), 1);
    }

    #[test]
    fn reloading_yields_identical_tables() {
        assert_eq!(parse(FULL_CSV), parse(FULL_CSV));
    }

    #[test]
    fn selection_month_day_do_not_narrow_the_table() {
        use std::io::Write as _;

        let dir = std::env::temp_dir().join("bikeshare_dataset_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(City::Chicago.data_file());
        std::fs::File::create(&path)
            .unwrap()
            .write_all(FULL_CSV.as_bytes())
            .unwrap();

        let selection = FilterSelection {
            city: City::Chicago,
            month: MonthFilter::Month(Month::March),
            day: DayFilter::Day(Weekday::Monday),
        };
        let dataset = load(&selection, &dir, &null_progress()).unwrap();

        // May rows survive a March filter: selectors are pass-through.
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows()[2].start_month, Some(Month::May));
    }
}
