//! Repeating work/off cycle.

use std::fmt;

use super::error::ScheduleError;

/// A repeating cycle of `work_length` work days followed by
/// `off_length` off days.
///
/// The cycle length is always at least 1 because `work_length` is.
///
/// # Examples
///
/// ```
/// use calendar_schedules::schedules::CyclePattern;
///
/// // Four on, three off
/// let pattern = CyclePattern::new(4, 3).unwrap();
/// assert_eq!(pattern.cycle_length(), 7);
/// assert!(pattern.is_work_day(3));
/// assert!(!pattern.is_work_day(4));
/// assert!(pattern.is_work_day(7));
///
/// assert!(CyclePattern::new(0, 3).is_err());
/// assert!(CyclePattern::new(1, -1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CyclePattern {
    work_length: u32,
    off_length: u32,
}

impl CyclePattern {
    /// Creates a pattern, validating both lengths.
    ///
    /// # Errors
    ///
    /// `ScheduleError::InvalidArgument` if `work_length < 1`, `off_length < 0`,
    /// or either does not fit in a `u32`.
    pub fn new(work_length: i64, off_length: i64) -> Result<Self, ScheduleError> {
        if work_length < 1 {
            return Err(ScheduleError::invalid_argument(format!(
                "work_length must be at least 1, got {}",
                work_length
            )));
        }
        if off_length < 0 {
            return Err(ScheduleError::invalid_argument(format!(
                "off_length must not be negative, got {}",
                off_length
            )));
        }

        let work_length = u32::try_from(work_length).map_err(|_| {
            ScheduleError::invalid_argument(format!("work_length {} is too large", work_length))
        })?;
        let off_length = u32::try_from(off_length).map_err(|_| {
            ScheduleError::invalid_argument(format!("off_length {} is too large", off_length))
        })?;

        Ok(Self {
            work_length,
            off_length,
        })
    }

    /// A pattern with no off days: every day is a work day.
    #[inline]
    pub fn every_day() -> Self {
        Self {
            work_length: 1,
            off_length: 0,
        }
    }

    /// Consecutive work days per cycle.
    #[inline]
    pub fn work_length(&self) -> u32 {
        self.work_length
    }

    /// Consecutive off days per cycle.
    #[inline]
    pub fn off_length(&self) -> u32 {
        self.off_length
    }

    /// Total days per cycle.
    #[inline]
    pub fn cycle_length(&self) -> u64 {
        u64::from(self.work_length) + u64::from(self.off_length)
    }

    /// Whether the day `offset_days` after the cycle anchor is a work day.
    ///
    /// Negative offsets count backwards through earlier cycles.
    pub fn is_work_day(&self, offset_days: i64) -> bool {
        let cycle = i128::from(self.cycle_length());
        i128::from(offset_days).rem_euclid(cycle) < i128::from(self.work_length)
    }
}

impl fmt::Display for CyclePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on / {} off", self.work_length, self.off_length)
    }
}
