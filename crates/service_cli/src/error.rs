//! CLI error types.

use calendar_core::types::DateError;
use calendar_schedules::schedules::ScheduleError;
use thiserror::Error;

/// Errors surfaced by `shiftcal` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument combination the command cannot act on.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Date construction, parsing, or search failure.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Rota generation failure.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// JSON rendering failure.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
