//! Deadline input parsing for the CLI.
//!
//! The store treats deadlines as opaque tokens. This module turns what a user
//! types into the `Y/M/D` token the date picker produced (no zero padding,
//! e.g. `2024/1/5`), so tokens written from the CLI sort the same way.

use super::error::{Result, TaskError};
use chrono::{Datelike, Duration, Local, NaiveDate};

const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Parses user input relative to the local date.
pub fn parse(input: &str) -> Result<String> {
    parse_relative_to(input, Local::now().date_naive())
}

/// Empty input stays empty (the service turns it into the sentinel).
/// Accepts `today`, `tomorrow` and the dates in [`INPUT_FORMATS`].
pub fn parse_relative_to(input: &str, today: NaiveDate) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }

    let date = match input.to_lowercase().as_str() {
        "today" => today,
        "tomorrow" => today + Duration::days(1),
        _ => INPUT_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
            .ok_or_else(|| TaskError::validation("deadline", format!("cannot read '{}' as a date", input)))?,
    };

    Ok(format_token(date))
}

pub fn format_token(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}
