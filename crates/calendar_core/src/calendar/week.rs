//! ISO 8601 week numbering.
//!
//! Weeks start on Monday. Week 1 of an ISO year is the week holding the
//! year's first Thursday, so the first days of January can belong to the
//! previous ISO year and the last days of December to the next one.

use crate::types::time::Date;

/// ISO week of `date` as `(iso_year, week)`.
///
/// # Examples
///
/// ```
/// use calendar_core::calendar::week::iso_week;
/// use calendar_core::types::Date;
///
/// // Sunday 3 January 2021 still belongs to week 53 of 2020
/// assert_eq!(iso_week(Date::from_ymd(2021, 1, 3).unwrap()), (2020, 53));
/// ```
#[inline]
pub fn iso_week(date: Date) -> (i32, u32) {
    date.iso_week()
}

/// ISO week number of `date`, ignoring which ISO year it belongs to.
#[inline]
pub fn week_number(date: Date) -> u32 {
    date.iso_week().1
}

/// Number of ISO weeks in `iso_year` (52 or 53).
///
/// 28 December always falls in the last ISO week of its year.
pub fn weeks_in_iso_year(iso_year: i32) -> u32 {
    match Date::from_ymd(iso_year, 12, 28) {
        Ok(date) => week_number(date),
        // 28 December exists in every year chrono can represent
        Err(_) => 52,
    }
}
