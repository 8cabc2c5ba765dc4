//! Timestamp command implementation
//!
//! Converts between Unix timestamps and calendar dates.

use calendar_core::types::{format_timestamp, Date};

use crate::{CliError, Result};

/// Renders `secs` with `pattern`, or the midnight timestamp of `date`.
pub fn render(secs: Option<i64>, date: Option<Date>, pattern: &str) -> Result<String> {
    match (secs, date) {
        (Some(secs), None) => Ok(format_timestamp(secs, pattern)?),
        (None, Some(date)) => Ok(date.to_timestamp().to_string()),
        _ => Err(CliError::InvalidArgument(
            "pass exactly one of --secs or --date".to_string(),
        )),
    }
}
