//! Calendar lookups over [`Date`](crate::types::Date).
//!
//! This module provides:
//! - `leap`: Gregorian leap-year rule, year and month lengths
//! - `quarter`: Quarter-from-month arithmetic and quarter containment
//! - `week`: ISO 8601 week numbering
//! - `weekday`: Weekday names, weekend counting, next Friday / Friday the 13th

pub mod leap;
pub mod quarter;
pub mod week;
pub mod weekday;

pub use leap::{days_in_month, days_in_year, is_leap_year};
pub use quarter::{is_in_quarter, quarter_of_month, quarter_range, same_quarter};
pub use week::{iso_week, week_number, weeks_in_iso_year};
pub use weekday::{
    count_weekend_days, is_weekend, next_friday, next_friday_13th, next_weekday, weekday_name,
    WEEKDAY_NAMES,
};
