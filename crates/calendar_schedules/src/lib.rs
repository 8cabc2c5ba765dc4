//! # Calendar Schedules (L2: Business Logic)
//!
//! Work rotas built on the `calendar_core` date types.
//!
//! This crate provides:
//! - Repeating work/off cycle patterns (`CyclePattern`)
//! - Rota generation over an inclusive date range (`generate_schedule`,
//!   `WorkSchedule`, `RotaBuilder`)
//! - TOML rota descriptions (`RotaConfig`, behind the `serde` feature)
//!
//! ## Design Principles
//!
//! - **Cycle anchored at the range start**, never at an external epoch
//! - **One error kind**: every rejected input is `ScheduleError::InvalidArgument`
//! - **Builder pattern** for ergonomic API with sensible defaults

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedules;
