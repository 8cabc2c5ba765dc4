//! Calendar lookup commands
//!
//! Weekday names, ISO weeks, quarters, leap years, weekend counts and
//! forward Friday searches for a single date or range.

use calendar_core::calendar::{
    count_weekend_days, days_in_year, is_leap_year, next_friday, next_friday_13th, quarter_range,
    weekday_name, weeks_in_iso_year,
};
use calendar_core::types::{Date, DateRange};
use tracing::debug;

use crate::Result;

/// Weekday name of `date`.
pub fn weekday(date: Date) -> String {
    format!("{} is a {}", date.to_dmy_string(), weekday_name(date))
}

/// ISO week of `date`.
pub fn week(date: Date) -> String {
    let (iso_year, number) = date.iso_week();
    format!(
        "{} is in ISO week {} of {} ({} weeks)",
        date.to_dmy_string(),
        number,
        iso_year,
        weeks_in_iso_year(iso_year)
    )
}

/// Quarter of `date` and the quarter's bounds.
pub fn quarter(date: Date) -> Result<String> {
    let bounds = quarter_range(date.year(), date.quarter())?;
    Ok(format!(
        "{} is in Q{} {} ({} to {})",
        date.to_dmy_string(),
        date.quarter(),
        date.year(),
        bounds.start().to_dmy_string(),
        bounds.end().to_dmy_string()
    ))
}

/// Leap-year status of `year`.
pub fn leap(year: i32) -> String {
    let verdict = if is_leap_year(year) { "is" } else { "is not" };
    format!("{} {} a leap year ({} days)", year, verdict, days_in_year(year))
}

/// Weekend days between `start` and `end`, inclusive.
pub fn weekends(start: Date, end: Date) -> String {
    let range = DateRange::new(start, end);
    debug!(%range, "counting weekend days");
    format!(
        "{} weekend days from {} to {}",
        count_weekend_days(range),
        start.to_dmy_string(),
        end.to_dmy_string()
    )
}

/// Next Friday, or next Friday the 13th, strictly after `date`.
pub fn next_friday_after(date: Date, thirteenth: bool) -> Result<String> {
    let found = if thirteenth {
        next_friday_13th(date)?
    } else {
        next_friday(date)?
    };
    Ok(found.to_dmy_string())
}
