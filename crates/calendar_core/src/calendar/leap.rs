//! Gregorian leap-year rule and month lengths.

use crate::types::error::DateError;

/// Whether `year` is a Gregorian leap year.
///
/// Divisible by 4, except centuries, which must be divisible by 400.
///
/// # Examples
///
/// ```
/// use calendar_core::calendar::leap::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `year` (365 or 366).
#[inline]
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// `DateError::InvalidMonth` if `month` is outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth(month));
    }
    Ok(month_length(year, month))
}

/// Month length for a month already known to be in 1-12.
pub(crate) fn month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
