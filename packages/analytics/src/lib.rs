#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Descriptive statistics over a loaded trip dataset.
//!
//! Four independent read-only passes: travel times, stations, trip
//! durations, and user demographics. Each pass returns a typed result
//! that the CLI renders; none of them mutate the table.
//!
//! Missing-value policy differs per pass and is pinned behavior: the
//! time and station modes drop missing values, the duration aggregates
//! fill them with zero, and the trip composite is built over the full
//! table.

pub mod mode;

use bikeshare_dataset::TripDataset;
use bikeshare_trip_models::{Month, Weekday};

use crate::mode::{mode, value_counts};

/// Most frequent travel times, one mode per derived column.
///
/// A field is `None` when its column is empty after dropping missing
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    /// Most popular start month.
    pub popular_month: Option<Month>,
    /// Most popular start weekday.
    pub popular_day: Option<Weekday>,
    /// Most popular start hour (0-23).
    pub popular_hour: Option<u32>,
}

/// Computes the most frequent month, weekday, and hour of travel.
#[must_use]
pub fn time_stats(dataset: &TripDataset) -> TimeStats {
    TimeStats {
        popular_month: mode(dataset.rows().iter().filter_map(|row| row.start_month)),
        popular_day: mode(dataset.rows().iter().filter_map(|row| row.start_day)),
        popular_hour: mode(dataset.rows().iter().filter_map(|row| row.start_hour)),
    }
}

/// Most popular stations and start/end station combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    /// Most frequent start station.
    pub popular_start: Option<String>,
    /// Most frequent end station.
    pub popular_end: Option<String>,
    /// Most frequent trip composite (`start-end`).
    pub popular_trip: Option<String>,
}

/// Computes the most popular start station, end station, and trip.
///
/// The start and end modes drop missing values; the trip composite is
/// derived for every row, with an absent station name joining as an
/// empty string.
#[must_use]
pub fn station_stats(dataset: &TripDataset) -> StationStats {
    StationStats {
        popular_start: mode(
            dataset
                .rows()
                .iter()
                .filter_map(|row| row.start_station.clone()),
        ),
        popular_end: mode(
            dataset
                .rows()
                .iter()
                .filter_map(|row| row.end_station.clone()),
        ),
        popular_trip: mode(dataset.rows().iter().map(|row| {
            format!(
                "{}-{}",
                row.start_station.as_deref().unwrap_or(""),
                row.end_station.as_deref().unwrap_or("")
            )
        })),
    }
}

/// Trip duration aggregates in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    /// Sum of all durations.
    pub total_seconds: f64,
    /// Arithmetic mean over all rows. NaN for an empty table.
    pub mean_seconds: f64,
}

/// Computes the total and mean trip duration.
///
/// Missing durations count as zero and stay in the mean's denominator.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn trip_duration_stats(dataset: &TripDataset) -> DurationStats {
    let total_seconds: f64 = dataset
        .rows()
        .iter()
        .map(|row| row.trip_duration.unwrap_or(0.0))
        .sum();

    DurationStats {
        total_seconds,
        mean_seconds: total_seconds / dataset.len() as f64,
    }
}

/// Outcome of summarizing one optional demographic column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnBreakdown<T> {
    /// Column absent from the file header; produces no output at all.
    Absent,
    /// Column present but every value missing.
    NotAvailable,
    /// Computed summary.
    Available(T),
}

/// Birth year summary, coerced to integers for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    /// Minimum birth year.
    pub earliest: i32,
    /// Maximum birth year.
    pub most_recent: i32,
    /// Most frequent birth year, ties by first occurrence.
    pub most_common: i32,
}

/// User demographic summaries, one per optional column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Counts per user type, descending.
    pub user_types: ColumnBreakdown<Vec<(String, u64)>>,
    /// Counts per gender, descending.
    pub genders: ColumnBreakdown<Vec<(String, u64)>>,
    /// Birth year summary.
    pub birth_years: ColumnBreakdown<BirthYearStats>,
}

/// Computes user demographic statistics for whichever optional columns
/// the dataset carries.
#[must_use]
pub fn user_stats(dataset: &TripDataset) -> UserStats {
    let schema = dataset.schema();

    UserStats {
        user_types: if schema.has_user_type {
            breakdown(dataset.rows().iter().filter_map(|row| row.user_type.clone()))
        } else {
            ColumnBreakdown::Absent
        },
        genders: if schema.has_gender {
            breakdown(dataset.rows().iter().filter_map(|row| row.gender.clone()))
        } else {
            ColumnBreakdown::Absent
        },
        birth_years: if schema.has_birth_year {
            birth_year_stats(dataset)
        } else {
            ColumnBreakdown::Absent
        },
    }
}

fn breakdown(values: impl IntoIterator<Item = String>) -> ColumnBreakdown<Vec<(String, u64)>> {
    let counts = value_counts(values);
    if counts.is_empty() {
        ColumnBreakdown::NotAvailable
    } else {
        ColumnBreakdown::Available(counts)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn birth_year_stats(dataset: &TripDataset) -> ColumnBreakdown<BirthYearStats> {
    let years: Vec<f64> = dataset
        .rows()
        .iter()
        .filter_map(|row| row.birth_year)
        .collect();

    let Some(earliest) = years.iter().copied().reduce(f64::min) else {
        return ColumnBreakdown::NotAvailable;
    };
    let most_recent = years.iter().copied().reduce(f64::max).unwrap_or(earliest);
    let most_common = mode(years.iter().map(|year| *year as i64)).unwrap_or(earliest as i64);

    ColumnBreakdown::Available(BirthYearStats {
        earliest: earliest as i32,
        most_recent: most_recent as i32,
        most_common: most_common as i32,
    })
}
