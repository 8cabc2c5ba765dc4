//! Core date types.
//!
//! This module provides:
//! - `time`: `Date`, `DateRange`, and Unix timestamp helpers
//! - `error`: Structured error type for date construction, parsing, and searches
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DateRange`], [`format_timestamp`], [`parse_timestamp`] from `time`
//! - [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::DateError;
pub use time::{format_timestamp, parse_timestamp, Date, DateRange, DayIter};
