//! # calendar_core: Date Foundation for shiftcal
//!
//! ## Layer 1 (Foundation) Role
//!
//! calendar_core is the bottom layer of the workspace, providing:
//! - Date types: `Date`, `DateRange` (`types::time`)
//! - Error type: `DateError` (`types::error`)
//! - Calendar lookups: leap years, quarters, ISO weeks, weekday names and
//!   forward weekday searches (`calendar`)
//!
//! Every function is pure; nothing here holds state between calls.
//!
//! ## Usage Examples
//!
//! ```rust
//! use calendar_core::calendar::{is_leap_year, next_friday_13th, weekday_name};
//! use calendar_core::types::{Date, DateRange};
//!
//! let date = Date::parse_dmy("15-06-2024").unwrap();
//! assert_eq!(weekday_name(date), "Saturday");
//! assert_eq!(date.quarter(), 2);
//! assert!(is_leap_year(date.year()));
//!
//! let friday_13th = next_friday_13th(date).unwrap();
//! assert_eq!(friday_13th.to_dmy_string(), "13-09-2024");
//!
//! let range = DateRange::new(date, friday_13th);
//! assert!(range.contains(Date::from_ymd(2024, 8, 1).unwrap()));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `Date` and `DateRange`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod types;
