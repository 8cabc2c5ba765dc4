//! Rota generation for repeating work/off cycles.
//!
//! This module provides:
//! - [`CyclePattern`]: `work_length` work days followed by `off_length` off days
//! - [`generate_schedule`]: Work days of a cycle over an inclusive date range
//! - [`WorkSchedule`]: Generated work days together with their range and cycle
//! - [`RotaBuilder`]: Builder pattern for constructing rotas
//! - [`ScheduleError`]: The single `InvalidArgument` failure kind
//!
//! # Examples
//!
//! ```
//! use calendar_schedules::schedules::{generate_schedule, RotaBuilder};
//! use calendar_core::types::{Date, DateRange};
//!
//! let start = Date::parse_dmy("01-01-2024").unwrap();
//! let end = Date::parse_dmy("10-01-2024").unwrap();
//!
//! // Every other day, starting on the first day of the range
//! let days = generate_schedule(DateRange::new(start, end), 1, 1).unwrap();
//! assert_eq!(days.len(), 5);
//!
//! // Zero-length work blocks are rejected
//! assert!(generate_schedule(DateRange::new(start, end), 0, 1).is_err());
//!
//! let rota = RotaBuilder::new().start(start).end(end).work_days(1).off_days(1).build().unwrap();
//! assert_eq!(rota.dates(), days.as_slice());
//! ```

#[cfg(feature = "serde")]
mod config;
mod error;
mod pattern;
mod rota;

#[cfg(feature = "serde")]
pub use config::RotaConfig;
pub use error::ScheduleError;
pub use pattern::CyclePattern;
pub use rota::{generate_schedule, RotaBuilder, WorkSchedule};
