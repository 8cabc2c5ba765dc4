//! Rota generation error types.

use calendar_core::types::DateError;
use thiserror::Error;

/// Errors that can occur during rota generation.
///
/// Every failure is a rejected input; there is no partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A cycle length, date, or configuration value was rejected.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },
}

impl ScheduleError {
    /// Creates an `InvalidArgument` error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        ScheduleError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl From<DateError> for ScheduleError {
    fn from(err: DateError) -> Self {
        ScheduleError::invalid_argument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ScheduleError::invalid_argument("work_length must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid argument: work_length must be at least 1, got 0"
        );
    }

    #[test]
    fn test_from_date_error() {
        let err: ScheduleError = DateError::InvalidDate {
            year: 2024,
            month: 2,
            day: 30,
        }
        .into();
        assert_eq!(
            err,
            ScheduleError::InvalidArgument {
                reason: "Invalid date: 2024-2-30".to_string()
            }
        );
    }
}
