//! Calendar quarters and quarter containment checks.
//!
//! Quarters are the usual three-month blocks: Q1 January-March,
//! Q2 April-June, Q3 July-September, Q4 October-December.

use super::leap::month_length;
use crate::types::error::DateError;
use crate::types::time::{Date, DateRange};

/// Quarter (1-4) that `month` belongs to.
///
/// # Errors
/// `DateError::InvalidMonth` if `month` is outside 1-12.
///
/// # Examples
///
/// ```
/// use calendar_core::calendar::quarter::quarter_of_month;
///
/// assert_eq!(quarter_of_month(1).unwrap(), 1);
/// assert_eq!(quarter_of_month(6).unwrap(), 2);
/// assert_eq!(quarter_of_month(12).unwrap(), 4);
/// assert!(quarter_of_month(13).is_err());
/// ```
pub fn quarter_of_month(month: u32) -> Result<u32, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth(month));
    }
    Ok((month - 1) / 3 + 1)
}

/// First and last day of `quarter` in `year`.
///
/// # Errors
/// `DateError::InvalidQuarter` if `quarter` is outside 1-4.
pub fn quarter_range(year: i32, quarter: u32) -> Result<DateRange, DateError> {
    if !(1..=4).contains(&quarter) {
        return Err(DateError::InvalidQuarter(quarter));
    }
    let first_month = (quarter - 1) * 3 + 1;
    let last_month = first_month + 2;

    let start = Date::from_ymd(year, first_month, 1)?;
    let end = Date::from_ymd(year, last_month, month_length(year, last_month))?;
    Ok(DateRange::new(start, end))
}

/// Whether `date` falls in `quarter` of `year`.
///
/// An out-of-range quarter contains nothing.
pub fn is_in_quarter(date: Date, year: i32, quarter: u32) -> bool {
    date.year() == year && date.quarter() == quarter
}

/// Whether two dates fall in the same quarter of the same year.
pub fn same_quarter(a: Date, b: Date) -> bool {
    is_in_quarter(b, a.year(), a.quarter())
}
