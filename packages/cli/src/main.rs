#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive CLI for exploring bikeshare trip data.
//!
//! With no subcommand the tool runs the interactive session: pick a city
//! and month/day selectors, get the four statistics reports, and page
//! through raw rows on demand. `bikeshare cities` lists the dataset
//! registry and exits.
//!
//! Uses `indicatif-log-bridge` (via [`bikeshare_cli_utils::init_logger`])
//! to route `log` output through `indicatif::MultiProgress` so that log
//! lines and the load spinner never fight for the terminal.

mod prompts;
mod reports;
mod session;
mod viewer;

use std::path::PathBuf;

use bikeshare_trip_models::City;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bikeshare", about = "Interactive bikeshare trip data explorer")]
struct Cli {
    /// Directory holding the city CSV files
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured city datasets
    Cities,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let multi = bikeshare_cli_utils::init_logger();

    match cli.command {
        Some(Commands::Cities) => list_cities(),
        None => {
            println!("Bikeshare Explorer");
            println!();
            session::run(&cli.data_dir, &multi)?;
        }
    }

    Ok(())
}

/// Prints a table of the configured city datasets.
fn list_cities() {
    println!("{:<16} FILE", "CITY");
    println!("{}", "-".repeat(40));
    for &city in City::ALL {
        println!("{:<16} {}", city.to_string(), city.data_file());
    }
}
