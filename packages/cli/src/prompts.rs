//! Filter collection prompts.
//!
//! Each selector loops on a blocking prompt until the input resolves,
//! printing a guidance line for anything outside the accepted domain.
//! Resolution itself is pure (and tested in `bikeshare_trip_models`);
//! the loops here only own the prompting.

use std::io;

use bikeshare_trip_models::{City, DayFilter, FilterSelection, MonthFilter};

const CITY_PROMPT: &str = "Which city would you like to analyse? Chicago, New York City, Washington";
const CITY_GUIDANCE: &str = "Please, insert a city as specified";

const MONTH_PROMPT: &str =
    "Which month do you want to analyse? January, February, March, April, May, June, or all";
const MONTH_GUIDANCE: &str = "Please, insert a month as specified";

const DAY_PROMPT: &str =
    "Which day do you want to analyse? Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday, or all";
const DAY_GUIDANCE: &str = "Please, select a day as specified";

/// Prompts until `resolve` accepts the answer.
fn prompt_until<T>(
    ask: &mut dyn FnMut(&str) -> io::Result<String>,
    prompt: &str,
    guidance: &str,
    resolve: impl Fn(&str) -> Option<T>,
) -> io::Result<T> {
    loop {
        let input = ask(prompt)?;
        if let Some(value) = resolve(&input) {
            return Ok(value);
        }
        println!("{guidance}");
    }
}

/// Collects the city, month, and day selectors for one session iteration.
///
/// # Errors
///
/// Returns an error only if the prompt backend fails; invalid answers are
/// recovered by re-prompting.
pub fn collect_filters(
    ask: &mut dyn FnMut(&str) -> io::Result<String>,
) -> io::Result<FilterSelection> {
    let city = prompt_until(ask, CITY_PROMPT, CITY_GUIDANCE, City::resolve)?;
    let month = prompt_until(ask, MONTH_PROMPT, MONTH_GUIDANCE, MonthFilter::resolve)?;
    let day = prompt_until(ask, DAY_PROMPT, DAY_GUIDANCE, DayFilter::resolve)?;

    println!("{}", "-".repeat(40));

    Ok(FilterSelection { city, month, day })
}
