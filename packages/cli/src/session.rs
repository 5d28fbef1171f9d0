//! One full pass of the exploration session, looped until the user
//! declines a restart.

use std::io;
use std::path::Path;
use std::time::Instant;

use bikeshare_cli_utils::{IndicatifProgress, MultiProgress};
use dialoguer::Input;

use crate::{prompts, reports, viewer};

/// Prompt backend used for every interactive question in the session.
fn terminal_ask(prompt: &str) -> io::Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(io::Error::other)
}

/// Runs filter collection, the dataset load, the four reports, and the
/// raw-data viewer, then offers to restart. Any restart answer other
/// than case-insensitive `"yes"` ends the session.
///
/// # Errors
///
/// Returns an error if the dataset fails to load or the terminal goes
/// away; invalid interactive answers are always recovered by
/// re-prompting.
pub fn run(data_dir: &Path, multi: &MultiProgress) -> Result<(), Box<dyn std::error::Error>> {
    let mut ask = terminal_ask;

    loop {
        let selection = prompts::collect_filters(&mut ask)?;

        let started = Instant::now();
        let progress =
            IndicatifProgress::rows_spinner(multi, &format!("Loading {}", selection.city));
        let dataset = bikeshare_dataset::load(&selection, data_dir, &progress)?;
        progress.finish_and_clear();
        log::info!("Loaded {} trips for {}", dataset.len(), dataset.city());
        reports::print_elapsed(started);
        reports::print_rule();

        reports::time_stats(&dataset);
        reports::station_stats(&dataset);
        reports::trip_duration_stats(&dataset);
        reports::user_stats(&dataset);

        viewer::view_raw_data(&dataset, &mut ask, &mut io::stdout())?;

        println!();
        let restart = ask("Would you like to restart? [Enter yes or no]")?;
        if !restart.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(())
}
