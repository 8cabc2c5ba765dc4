//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing, and calendar searches

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `InvalidMonth`: Month outside 1-12
/// - `InvalidQuarter`: Quarter outside 1-4
/// - `ParseError`: Failed to parse a date, timestamp, or format pattern
/// - `TimestampOutOfRange`: Unix timestamp not representable as a date
/// - `DateOverflow`: Date arithmetic left the supported range
/// - `SearchExhausted`: A bounded forward search found no match
///
/// # Examples
/// ```
/// use calendar_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Month number outside 1-12.
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    /// Quarter number outside 1-4.
    #[error("Invalid quarter: {0} (expected 1-4)")]
    InvalidQuarter(u32),

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Unix timestamp outside the representable date range.
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    /// Date arithmetic overflow.
    #[error("Date arithmetic overflow: {reason}")]
    DateOverflow {
        /// Reason for the overflow.
        reason: String,
    },

    /// Forward search gave up after its iteration guard.
    #[error("No match found within {months} months")]
    SearchExhausted {
        /// Number of months inspected.
        months: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "Invalid date: 2023-2-29");

        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (expected 1-12)"
        );
        assert_eq!(
            DateError::InvalidQuarter(0).to_string(),
            "Invalid quarter: 0 (expected 1-4)"
        );
        assert_eq!(
            DateError::SearchExhausted { months: 14 }.to_string(),
            "No match found within 14 months"
        );
    }

    #[test]
    fn test_date_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&DateError::ParseError("bad".to_string()));
    }
}
