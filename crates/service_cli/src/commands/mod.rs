//! CLI command implementations
//!
//! Each submodule implements one group of commands. Every command renders
//! its output to a `String` first so the rendering can be tested without
//! capturing stdout.

pub mod lookup;
pub mod schedule;
pub mod timestamp;
