//! TOML rota descriptions.
//!
//! ```toml
//! start = "01-01-2024"
//! end = "15-01-2024"
//! work_days = 1
//! off_days = 3
//! ```
//!
//! Dates use the DD-MM-YYYY exchange format. `off_days` may be omitted
//! and defaults to 0.

use calendar_core::types::time::{Date, DateRange};
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;
use super::pattern::CyclePattern;
use super::rota::WorkSchedule;

/// Unvalidated rota description as read from text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotaConfig {
    /// First day of the range (DD-MM-YYYY).
    pub start: String,
    /// Last day of the range (DD-MM-YYYY).
    pub end: String,
    /// Consecutive work days per cycle.
    pub work_days: i64,
    /// Consecutive off days per cycle.
    #[serde(default)]
    pub off_days: i64,
}

impl RotaConfig {
    /// Reads a rota description from TOML text.
    ///
    /// # Errors
    ///
    /// `ScheduleError::InvalidArgument` if the text is not valid TOML,
    /// misses a required key, or carries an unknown one.
    pub fn from_toml_str(text: &str) -> Result<Self, ScheduleError> {
        toml::from_str(text)
            .map_err(|e| ScheduleError::invalid_argument(format!("rota config: {}", e.message())))
    }

    /// Validates the description into a range and cycle.
    ///
    /// # Errors
    ///
    /// `ScheduleError::InvalidArgument` if a date is malformed or the
    /// cycle lengths are rejected.
    pub fn validate(&self) -> Result<(DateRange, CyclePattern), ScheduleError> {
        let start = Date::parse_dmy(&self.start)?;
        let end = Date::parse_dmy(&self.end)?;
        let pattern = CyclePattern::new(self.work_days, self.off_days)?;
        Ok((DateRange::new(start, end), pattern))
    }

    /// Validates the description and generates its rota.
    pub fn generate(&self) -> Result<WorkSchedule, ScheduleError> {
        let (range, pattern) = self.validate()?;
        Ok(WorkSchedule::generate(range, pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_str() {
        let config = RotaConfig::from_toml_str(
            r#"
            start = "01-01-2024"
            end = "15-01-2024"
            work_days = 1
            off_days = 3
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            RotaConfig {
                start: "01-01-2024".to_string(),
                end: "15-01-2024".to_string(),
                work_days: 1,
                off_days: 3,
            }
        );
        assert_eq!(
            config.generate().unwrap().format_dates(),
            vec!["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]
        );
    }

    #[test]
    fn test_off_days_defaults_to_zero() {
        let config = RotaConfig::from_toml_str(
            "start = \"01-01-2024\"\nend = \"03-01-2024\"\nwork_days = 2\n",
        )
        .unwrap();
        assert_eq!(config.off_days, 0);
        assert_eq!(config.generate().unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = RotaConfig::from_toml_str(
            "start = \"01-01-2024\"\nend = \"03-01-2024\"\nwork_days = 2\nshift = \"night\"\n",
        );
        assert!(matches!(result, Err(ScheduleError::InvalidArgument { .. })));
    }

    #[test]
    fn test_missing_key_rejected() {
        let result = RotaConfig::from_toml_str("start = \"01-01-2024\"\nwork_days = 2\n");
        assert!(matches!(result, Err(ScheduleError::InvalidArgument { .. })));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let config = RotaConfig {
            start: "31-02-2024".to_string(),
            end: "15-03-2024".to_string(),
            work_days: 1,
            off_days: 1,
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("31-02-2024"));
    }

    #[test]
    fn test_invalid_cycle_rejected() {
        let config = RotaConfig {
            start: "01-01-2024".to_string(),
            end: "15-01-2024".to_string(),
            work_days: 0,
            off_days: 1,
        };
        assert!(config.generate().is_err());
    }
}
