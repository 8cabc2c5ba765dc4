//! Weekday names, weekend counting, and forward weekday searches.

use chrono::Weekday;

use crate::types::error::DateError;
use crate::types::time::{Date, DateRange};

/// English weekday names indexed by days from Monday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Upper bound on months inspected by [`next_friday_13th`].
///
/// Consecutive Friday the 13ths are never more than 14 months apart.
pub const MAX_MONTHS_SEARCHED: u32 = 14;

/// Name of `weekday`.
#[inline]
pub fn name_of(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Name of the weekday `date` falls on.
///
/// # Examples
///
/// ```
/// use calendar_core::calendar::weekday::weekday_name;
/// use calendar_core::types::Date;
///
/// assert_eq!(weekday_name(Date::from_ymd(2024, 6, 15).unwrap()), "Saturday");
/// ```
#[inline]
pub fn weekday_name(date: Date) -> &'static str {
    name_of(date.weekday())
}

/// Whether `date` is a Saturday or Sunday.
#[inline]
pub fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts Saturdays and Sundays in `range`, both ends inclusive.
///
/// An empty range counts zero.
pub fn count_weekend_days(range: DateRange) -> u64 {
    range.iter_days().filter(|d| is_weekend(*d)).count() as u64
}

/// First date strictly after `from` that falls on `target`.
///
/// Always between 1 and 7 days ahead.
///
/// # Errors
/// `DateError::DateOverflow` if the result lies past the last supported date.
pub fn next_weekday(from: Date, target: Weekday) -> Result<Date, DateError> {
    let current = from.weekday().num_days_from_monday();
    let wanted = target.num_days_from_monday();
    let ahead = match (wanted + 7 - current) % 7 {
        0 => 7,
        n => n,
    };

    from.checked_add_days(i64::from(ahead))
        .ok_or_else(|| DateError::DateOverflow {
            reason: format!("no {} after {}", name_of(target), from),
        })
}

/// First Friday strictly after `from`.
///
/// # Examples
///
/// ```
/// use calendar_core::calendar::weekday::next_friday;
/// use calendar_core::types::Date;
///
/// let friday = Date::from_ymd(2024, 6, 14).unwrap();
/// assert_eq!(next_friday(friday).unwrap(), Date::from_ymd(2024, 6, 21).unwrap());
/// ```
pub fn next_friday(from: Date) -> Result<Date, DateError> {
    next_weekday(from, Weekday::Fri)
}

/// First Friday the 13th strictly after `from`.
///
/// Walks forward one month at a time, checking the 13th of each, and
/// stops after [`MAX_MONTHS_SEARCHED`] months.
///
/// # Errors
/// - `DateError::DateOverflow` if the walk leaves the supported date range
/// - `DateError::SearchExhausted` if no match is found within the guard
///
/// # Examples
///
/// ```
/// use calendar_core::calendar::weekday::next_friday_13th;
/// use calendar_core::types::Date;
///
/// let from = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(next_friday_13th(from).unwrap(), Date::from_ymd(2024, 9, 13).unwrap());
/// ```
pub fn next_friday_13th(from: Date) -> Result<Date, DateError> {
    let (mut year, mut month) = if from.day() < 13 {
        (from.year(), from.month())
    } else {
        next_month(from.year(), from.month())
    };

    for _ in 0..MAX_MONTHS_SEARCHED {
        let candidate = Date::from_ymd(year, month, 13).map_err(|_| DateError::DateOverflow {
            reason: format!("no Friday the 13th after {}", from),
        })?;
        if candidate.weekday() == Weekday::Fri {
            return Ok(candidate);
        }
        (year, month) = next_month(year, month);
    }

    Err(DateError::SearchExhausted {
        months: MAX_MONTHS_SEARCHED,
    })
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
