//! Console rendering for the four statistics passes.
//!
//! Each report times its own pass and prints the elapsed wall-clock
//! seconds followed by a rule, in the fixed order the session runs them.

use std::time::Instant;

use bikeshare_analytics::{ColumnBreakdown, UserStats};
use bikeshare_dataset::TripDataset;

/// Prints the elapsed-time footer every phase ends with.
pub fn print_elapsed(started: Instant) {
    println!("\nThis took {} seconds.", started.elapsed().as_secs_f64());
}

/// Prints the rule separating phases.
pub fn print_rule() {
    println!("{}", "-".repeat(40));
}

/// Reports the most frequent times of travel.
pub fn time_stats(dataset: &TripDataset) {
    let started = Instant::now();
    let stats = bikeshare_analytics::time_stats(dataset);

    if let Some(month) = stats.popular_month {
        println!("The most popular month is {month}");
    }
    if let Some(day) = stats.popular_day {
        println!("The most popular day is {day}");
    }
    if let Some(hour) = stats.popular_hour {
        println!("The most popular hour is {hour}");
    }

    print_elapsed(started);
    print_rule();
}

/// Reports the most popular stations and trip.
pub fn station_stats(dataset: &TripDataset) {
    let started = Instant::now();
    let stats = bikeshare_analytics::station_stats(dataset);

    if let Some(station) = stats.popular_start {
        println!("The most popular start station is {station}");
    }
    if let Some(station) = stats.popular_end {
        println!("The most popular end station is {station}");
    }
    if let Some(trip) = stats.popular_trip {
        println!("Most Popular Combination:  {trip}");
    }

    print_elapsed(started);
    print_rule();
}

/// Reports total and mean trip duration.
pub fn trip_duration_stats(dataset: &TripDataset) {
    println!("Calculating Trip Duration...");
    let started = Instant::now();
    let stats = bikeshare_analytics::trip_duration_stats(dataset);

    println!("Total Travel Time:  {}", stats.total_seconds);
    println!("Mean Travel Time:  {}", stats.mean_seconds);

    print_elapsed(started);
    print_rule();
}

/// Reports user demographics for whichever optional columns exist.
pub fn user_stats(dataset: &TripDataset) {
    println!("Calculating User Statistics...");
    let started = Instant::now();
    let stats: UserStats = bikeshare_analytics::user_stats(dataset);

    match stats.user_types {
        ColumnBreakdown::Absent => {}
        ColumnBreakdown::NotAvailable => println!("Data not available"),
        ColumnBreakdown::Available(counts) => {
            println!("User type count:");
            for (user_type, count) in counts {
                println!("  {user_type}: {count}");
            }
        }
    }

    match stats.genders {
        ColumnBreakdown::Absent => {}
        ColumnBreakdown::NotAvailable => println!("Data not available"),
        ColumnBreakdown::Available(counts) => {
            println!("Gender count:");
            for (gender, count) in counts {
                println!("  {gender}: {count}");
            }
        }
    }

    match stats.birth_years {
        ColumnBreakdown::Absent => {}
        ColumnBreakdown::NotAvailable => println!("Data not available"),
        ColumnBreakdown::Available(years) => {
            println!("Earliest year of birth : {}", years.earliest);
            println!("Most recent year of birth : {}", years.most_recent);
            println!("Most common year of birth : {}", years.most_common);
        }
    }

    print_elapsed(started);
    print_rule();
}
