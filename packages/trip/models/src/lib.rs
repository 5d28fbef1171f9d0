#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Trip record types, the city dataset registry, and the month/weekday
//! vocabularies shared across the bikeshare toolchain.
//!
//! Every crate in the workspace speaks in terms of [`TripRecord`] — the
//! loader produces them, the analytics passes aggregate them, and the CLI
//! renders them.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A city with a published trip dataset.
///
/// Parsing is case-insensitive against the display name, so `"chicago"`,
/// `"Chicago"`, and `"CHICAGO"` all resolve to [`City::Chicago`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum City {
    /// Chicago, IL (Divvy)
    Chicago,
    /// New York City, NY (Citi Bike)
    NewYorkCity,
    /// Washington, DC (Capital Bikeshare)
    Washington,
}

impl City {
    /// All cities with a configured dataset, in registry order.
    pub const ALL: &[Self] = &[Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// Returns the CSV file name this city's dataset is stored under.
    #[must_use]
    pub const fn data_file(self) -> &'static str {
        match self {
            Self::Chicago => "chicago.csv",
            Self::NewYorkCity => "new_york_city.csv",
            Self::Washington => "washington.csv",
        }
    }

    /// Resolves user input to a city, ignoring case and surrounding
    /// whitespace. Returns `None` for anything outside the registry.
    #[must_use]
    pub fn resolve(input: &str) -> Option<Self> {
        input.trim().parse().ok()
    }
}

/// Calendar month, numbered 1 (January) through 12 (December).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Returns the calendar number of this month (1-12).
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Creates a month from its calendar number (1-12).
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }
}

/// Day of the week, indexed 0 (Monday) through 6 (Sunday).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// Returns the Monday-based index of this weekday (0-6).
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Creates a weekday from its Monday-based index (0-6).
    #[must_use]
    pub const fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(Self::Monday),
            1 => Some(Self::Tuesday),
            2 => Some(Self::Wednesday),
            3 => Some(Self::Thursday),
            4 => Some(Self::Friday),
            5 => Some(Self::Saturday),
            6 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Converts from a `chrono` weekday.
    #[must_use]
    pub fn from_chrono(weekday: chrono::Weekday) -> Self {
        // num_days_from_monday is always 0-6, so the lookup cannot miss.
        Self::from_index(weekday.num_days_from_monday()).unwrap_or(Self::Monday)
    }
}

/// Month selector collected from the user.
///
/// The published datasets only cover January through June, so that is the
/// accepted domain; `"all"` applies no month restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthFilter {
    /// No month restriction.
    All,
    /// Restrict to a single month.
    Month(Month),
}

impl MonthFilter {
    /// Resolves user input to a month selector, ignoring case and
    /// surrounding whitespace.
    ///
    /// Accepts `"all"` or a month name in the January-June domain; month
    /// names outside the covered half-year are rejected.
    #[must_use]
    pub fn resolve(input: &str) -> Option<Self> {
        let token = input.trim();
        if token.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        let month: Month = token.parse().ok()?;
        if month.number() > Month::June.number() {
            return None;
        }
        Some(Self::Month(month))
    }
}

/// Weekday selector collected from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayFilter {
    /// No weekday restriction.
    All,
    /// Restrict to a single weekday.
    Day(Weekday),
}

impl DayFilter {
    /// Resolves user input to a weekday selector, ignoring case and
    /// surrounding whitespace. Accepts `"all"` or any weekday name.
    #[must_use]
    pub fn resolve(input: &str) -> Option<Self> {
        let token = input.trim();
        if token.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        token.parse().ok().map(Self::Day)
    }
}

/// The user's chosen city/month/day tuple for one session iteration.
///
/// The month and day selectors are validated at collection time and
/// carried through the loader interface, but the loader does not narrow
/// the table by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// City whose dataset to load.
    pub city: City,
    /// Month restriction, or [`MonthFilter::All`].
    pub month: MonthFilter,
    /// Weekday restriction, or [`DayFilter::All`].
    pub day: DayFilter,
}

/// Which optional demographic columns a city's CSV header carried.
///
/// Washington's file ships without `Gender` and `Birth Year`; a column
/// that is absent from the schema is distinct from a column whose values
/// are missing, and the user statistics pass treats the two differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSchema {
    /// `User Type` column present in the header.
    pub has_user_type: bool,
    /// `Gender` column present in the header.
    pub has_gender: bool,
    /// `Birth Year` column present in the header.
    pub has_birth_year: bool,
}

/// One trip, as loaded from a city dataset.
///
/// Raw fields are `None` when the CSV cell was empty or the column absent;
/// the derived start month/day/hour are computed from `start_time` at load
/// time and are `None` exactly when the timestamp is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// When the trip started.
    pub start_time: Option<NaiveDateTime>,
    /// Station the trip started from.
    pub start_station: Option<String>,
    /// Station the trip ended at.
    pub end_station: Option<String>,
    /// Trip length in seconds.
    pub trip_duration: Option<f64>,
    /// Rider classification (e.g., "Subscriber", "Customer").
    pub user_type: Option<String>,
    /// Rider gender, where the city publishes it.
    pub gender: Option<String>,
    /// Rider birth year, where the city publishes it. Stored as the
    /// fractional value the files carry (e.g., `1992.0`).
    pub birth_year: Option<f64>,
    /// Derived: calendar month of `start_time`.
    pub start_month: Option<Month>,
    /// Derived: weekday of `start_time`.
    pub start_day: Option<Weekday>,
    /// Derived: hour of day (0-23) of `start_time`.
    pub start_hour: Option<u32>,
}

impl TripRecord {
    /// Builds a record from raw fields, computing the derived start
    /// month/day/hour columns.
    #[must_use]
    pub fn new(
        start_time: Option<NaiveDateTime>,
        start_station: Option<String>,
        end_station: Option<String>,
        trip_duration: Option<f64>,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<f64>,
    ) -> Self {
        let start_month = start_time.and_then(|t| Month::from_number(t.month()));
        let start_day = start_time.map(|t| Weekday::from_chrono(t.weekday()));
        let start_hour = start_time.map(|t| t.hour());

        Self {
            start_time,
            start_station,
            end_station,
            trip_duration,
            user_type,
            gender,
            birth_year,
            start_month,
            start_day,
            start_hour,
        }
    }

    /// Whether every schema-present field of this record is populated.
    ///
    /// Columns absent from `schema` do not count against completeness, so
    /// Washington rows are not discarded for lacking demographics the
    /// city never published.
    #[must_use]
    pub const fn is_complete(&self, schema: TripSchema) -> bool {
        self.start_time.is_some()
            && self.start_station.is_some()
            && self.end_station.is_some()
            && self.trip_duration.is_some()
            && (!schema.has_user_type || self.user_type.is_some())
            && (!schema.has_gender || self.gender.is_some())
            && (!schema.has_birth_year || self.birth_year.is_some())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn timestamp(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap()
    }

    #[test]
    fn resolves_cities_case_insensitively() {
        assert_eq!(City::resolve("chicago"), Some(City::Chicago));
        assert_eq!(City::resolve("CHICAGO"), Some(City::Chicago));
        assert_eq!(City::resolve("New York City"), Some(City::NewYorkCity));
        assert_eq!(City::resolve("new york city"), Some(City::NewYorkCity));
        assert_eq!(City::resolve("  washington  "), Some(City::Washington));
    }

    #[test]
    fn rejects_unknown_cities() {
        assert_eq!(City::resolve("boston"), None);
        assert_eq!(City::resolve(""), None);
        assert_eq!(City::resolve("new york"), None);
    }

    #[test]
    fn city_data_files_are_stable() {
        assert_eq!(City::Chicago.data_file(), "chicago.csv");
        assert_eq!(City::NewYorkCity.data_file(), "new_york_city.csv");
        assert_eq!(City::Washington.data_file(), "washington.csv");
    }

    #[test]
    fn resolves_month_filters_in_domain() {
        assert_eq!(MonthFilter::resolve("all"), Some(MonthFilter::All));
        assert_eq!(MonthFilter::resolve("ALL"), Some(MonthFilter::All));
        assert_eq!(
            MonthFilter::resolve("january"),
            Some(MonthFilter::Month(Month::January))
        );
        assert_eq!(
            MonthFilter::resolve("June"),
            Some(MonthFilter::Month(Month::June))
        );
    }

    #[test]
    fn rejects_months_outside_covered_half_year() {
        assert_eq!(MonthFilter::resolve("july"), None);
        assert_eq!(MonthFilter::resolve("december"), None);
        assert_eq!(MonthFilter::resolve("janua"), None);
    }

    #[test]
    fn resolves_day_filters() {
        assert_eq!(DayFilter::resolve("all"), Some(DayFilter::All));
        assert_eq!(
            DayFilter::resolve("monday"),
            Some(DayFilter::Day(Weekday::Monday))
        );
        assert_eq!(
            DayFilter::resolve("SUNDAY"),
            Some(DayFilter::Day(Weekday::Sunday))
        );
        assert_eq!(DayFilter::resolve("someday"), None);
    }

    #[test]
    fn month_numbers_round_trip() {
        for number in 1..=12 {
            let month = Month::from_number(number).unwrap();
            assert_eq!(month.number(), number);
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn weekday_labels_match_indices() {
        assert_eq!(Weekday::from_index(0), Some(Weekday::Monday));
        assert_eq!(Weekday::from_index(6), Some(Weekday::Sunday));
        assert_eq!(Weekday::Monday.to_string(), "Monday");
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn derives_start_columns_from_timestamp() {
        // 2017-03-01 was a Wednesday.
        let record = TripRecord::new(
            Some(timestamp(2017, 3, 1, 9)),
            Some("A".into()),
            Some("B".into()),
            Some(60.0),
            None,
            None,
            None,
        );
        assert_eq!(record.start_month, Some(Month::March));
        assert_eq!(record.start_day, Some(Weekday::Wednesday));
        assert_eq!(record.start_hour, Some(9));
    }

    #[test]
    fn missing_timestamp_leaves_derived_columns_empty() {
        let record = TripRecord::new(
            None,
            Some("A".into()),
            Some("B".into()),
            Some(60.0),
            None,
            None,
            None,
        );
        assert_eq!(record.start_month, None);
        assert_eq!(record.start_day, None);
        assert_eq!(record.start_hour, None);
    }

    #[test]
    fn completeness_respects_schema() {
        let schema_full = TripSchema {
            has_user_type: true,
            has_gender: true,
            has_birth_year: true,
        };
        let schema_washington = TripSchema {
            has_user_type: true,
            has_gender: false,
            has_birth_year: false,
        };

        let record = TripRecord::new(
            Some(timestamp(2017, 1, 2, 0)),
            Some("A".into()),
            Some("B".into()),
            Some(100.0),
            Some("Subscriber".into()),
            None,
            None,
        );

        assert!(!record.is_complete(schema_full));
        assert!(record.is_complete(schema_washington));
    }
}
