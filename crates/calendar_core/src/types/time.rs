//! Date types for calendar arithmetic.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - `DateRange`: Inclusive span of dates with containment and day iteration
//! - Unix timestamp conversion and formatting helpers
//!
//! # Examples
//!
//! ```
//! use calendar_core::types::time::{Date, DateRange};
//!
//! let start = Date::parse_dmy("01-01-2024").unwrap();
//! let end = Date::parse_dmy("10-01-2024").unwrap();
//! let range = DateRange::new(start, end);
//!
//! assert_eq!(range.len_days(), 10);
//! assert!(range.contains(Date::from_ymd(2024, 1, 5).unwrap()));
//! ```

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use std::fmt::{self, Write};
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;
use crate::calendar::leap;

/// `strftime` pattern of the day-month-year exchange format.
pub const DMY_FORMAT: &str = "%d-%m-%Y";

/// `strftime` pattern of the ISO 8601 calendar date format.
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Default pattern used by [`format_timestamp`].
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Serialises as an ISO 8601 string. Day-month-year text, the exchange
/// format used by callers, goes through [`Date::parse_dmy`] and
/// [`Date::to_dmy_string`].
///
/// # Examples
///
/// ```
/// use calendar_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month(), 6);
/// assert_eq!(date.day(), 15);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_core::types::time::Date;
    ///
    /// // Leap year February 29th
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    ///
    /// // Invalid date returns error
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_core::types::time::Date;
    ///
    /// let date = Date::parse("2024-06-15").unwrap();
    /// assert_eq!(date.year(), 2024);
    ///
    /// assert!(Date::parse("not-a-date").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        Self::parse_with(s, ISO_FORMAT)
    }

    /// Parses a date in day-month-year form (DD-MM-YYYY).
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_core::types::time::Date;
    ///
    /// let date = Date::parse_dmy("13-09-2024").unwrap();
    /// assert_eq!((date.year(), date.month(), date.day()), (2024, 9, 13));
    ///
    /// // 31 April does not exist
    /// assert!(Date::parse_dmy("31-04-2024").is_err());
    /// ```
    pub fn parse_dmy(s: &str) -> Result<Self, DateError> {
        Self::parse_with(s, DMY_FORMAT)
    }

    fn parse_with(s: &str, pattern: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), pattern)
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Converts a Unix timestamp (seconds, UTC) to the date it falls on.
    ///
    /// The time of day is discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_core::types::time::Date;
    ///
    /// let date = Date::from_timestamp(1_718_454_896).unwrap(); // 2024-06-15 12:34:56 UTC
    /// assert_eq!(date, Date::from_ymd(2024, 6, 15).unwrap());
    /// ```
    pub fn from_timestamp(secs: i64) -> Result<Self, DateError> {
        DateTime::from_timestamp(secs, 0)
            .map(|dt| Date(dt.date_naive()))
            .ok_or(DateError::TimestampOutOfRange(secs))
    }

    /// Returns the Unix timestamp of midnight UTC on this date.
    pub fn to_timestamp(&self) -> i64 {
        self.0.and_time(NaiveTime::default()).and_utc().timestamp()
    }

    /// Formats the date as DD-MM-YYYY.
    pub fn to_dmy_string(&self) -> String {
        self.0.format(DMY_FORMAT).to_string()
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Whether this date's year is a Gregorian leap year.
    pub fn is_leap_year(&self) -> bool {
        leap::is_leap_year(self.year())
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u32 {
        leap::month_length(self.year(), self.month())
    }

    /// Calendar quarter (1-4) this date falls in.
    pub fn quarter(&self) -> u32 {
        (self.month() - 1) / 3 + 1
    }

    /// ISO 8601 week as `(iso_year, week)`.
    ///
    /// The ISO year can differ from the calendar year in the first and
    /// last days of January and December.
    ///
    /// # Examples
    ///
    /// ```
    /// use calendar_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2024, 12, 30).unwrap();
    /// assert_eq!(date.iso_week(), (2025, 1));
    /// ```
    pub fn iso_week(&self) -> (i32, u32) {
        let week = self.0.iso_week();
        (week.year(), week.week())
    }

    /// Adds a signed number of days, returning `None` on overflow.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted.map(Date)
    }

    /// Returns the following day, or `None` at the end of the supported range.
    pub fn succ(self) -> Option<Self> {
        self.0.succ_opt().map(Date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_FORMAT))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

/// Inclusive span of calendar days.
///
/// Both `start` and `end` belong to the range. A range whose start lies
/// after its end is valid but empty: it contains and yields no days.
///
/// # Examples
///
/// ```
/// use calendar_core::types::time::{Date, DateRange};
///
/// let range = DateRange::new(
///     Date::from_ymd(2024, 1, 30).unwrap(),
///     Date::from_ymd(2024, 2, 2).unwrap(),
/// );
/// let days: Vec<u32> = range.iter_days().map(|d| d.day()).collect();
/// assert_eq!(days, vec![30, 31, 1, 2]);
///
/// let reversed = DateRange::new(range.end(), range.start());
/// assert!(reversed.is_empty());
/// assert_eq!(reversed.iter_days().count(), 0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range from its inclusive endpoints.
    #[inline]
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one day.
    #[inline]
    pub fn single(date: Date) -> Self {
        Self::new(date, date)
    }

    /// First day of the range.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether the range holds no days (start after end).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Number of days in the range, counting both endpoints.
    pub fn len_days(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as u64 + 1
        }
    }

    /// Whether `date` lies within the range (inclusive on both ends).
    #[inline]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterates the days of the range in ascending order.
    pub fn iter_days(&self) -> DayIter {
        DayIter {
            next: (!self.is_empty()).then_some(self.start.0),
            last: self.end.0,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DayIter;

    fn into_iter(self) -> DayIter {
        self.iter_days()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Ascending day-by-day iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DayIter {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for DayIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        if current > self.last {
            self.next = None;
            return None;
        }
        self.next = current.succ_opt();
        Some(Date(current))
    }
}

/// Renders a Unix timestamp (seconds, UTC) with a `strftime` pattern.
///
/// # Errors
/// `TimestampOutOfRange` if `secs` is not representable, `ParseError`
/// if `pattern` contains an invalid specifier.
///
/// # Examples
///
/// ```
/// use calendar_core::types::time::{format_timestamp, DEFAULT_TIMESTAMP_FORMAT};
///
/// let text = format_timestamp(1_718_454_896, DEFAULT_TIMESTAMP_FORMAT).unwrap();
/// assert_eq!(text, "15-06-2024 12:34:56");
/// ```
pub fn format_timestamp(secs: i64, pattern: &str) -> Result<String, DateError> {
    let dt = DateTime::from_timestamp(secs, 0).ok_or(DateError::TimestampOutOfRange(secs))?;

    let mut out = String::new();
    write!(out, "{}", dt.format(pattern))
        .map_err(|_| DateError::ParseError(format!("invalid format pattern '{}'", pattern)))?;
    Ok(out)
}

/// Parses date-time text in UTC into a Unix timestamp (seconds).
///
/// # Examples
///
/// ```
/// use calendar_core::types::time::{parse_timestamp, DEFAULT_TIMESTAMP_FORMAT};
///
/// let secs = parse_timestamp("01-01-1970 00:01:00", DEFAULT_TIMESTAMP_FORMAT).unwrap();
/// assert_eq!(secs, 60);
/// ```
pub fn parse_timestamp(s: &str, pattern: &str) -> Result<i64, DateError> {
    NaiveDateTime::parse_from_str(s.trim(), pattern)
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
}
