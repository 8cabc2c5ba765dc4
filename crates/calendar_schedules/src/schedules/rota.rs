//! Rota generation and RotaBuilder implementation.

use calendar_core::types::time::{Date, DateRange};
use tracing::{debug, debug_span};

use super::error::ScheduleError;
use super::pattern::CyclePattern;

/// Lists the work days of a repeating cycle over an inclusive range.
///
/// The cycle starts at `range.start()`: day 0 of the range is the first
/// work day, and a day `n` days after the start is a work day iff
/// `n mod (work_length + off_length) < work_length`.
///
/// A range whose start lies after its end yields an empty list.
///
/// # Errors
///
/// `ScheduleError::InvalidArgument` if `work_length < 1` or `off_length < 0`.
///
/// # Examples
///
/// ```
/// use calendar_schedules::schedules::generate_schedule;
/// use calendar_core::types::{Date, DateRange};
///
/// let range = DateRange::new(
///     Date::parse_dmy("01-01-2024").unwrap(),
///     Date::parse_dmy("15-01-2024").unwrap(),
/// );
/// let days: Vec<String> = generate_schedule(range, 1, 3)
///     .unwrap()
///     .iter()
///     .map(|d| d.to_dmy_string())
///     .collect();
///
/// assert_eq!(days, ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]);
/// ```
pub fn generate_schedule(
    range: DateRange,
    work_length: i64,
    off_length: i64,
) -> Result<Vec<Date>, ScheduleError> {
    let pattern = CyclePattern::new(work_length, off_length)?;
    Ok(WorkSchedule::generate(range, pattern).into_dates())
}

/// The work days of a cycle over a date range, with the inputs that
/// produced them.
///
/// Dates are strictly ascending and all lie within the range.
///
/// # Examples
///
/// ```
/// use calendar_schedules::schedules::{CyclePattern, WorkSchedule};
/// use calendar_core::types::{Date, DateRange};
///
/// let range = DateRange::new(
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2024, 1, 10).unwrap(),
/// );
/// let rota = WorkSchedule::generate(range, CyclePattern::new(1, 1).unwrap());
///
/// assert_eq!(rota.len(), 5);
/// assert!(rota.contains(Date::from_ymd(2024, 1, 9).unwrap()));
/// assert!(!rota.contains(Date::from_ymd(2024, 1, 10).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WorkSchedule {
    range: DateRange,
    pattern: CyclePattern,
    dates: Vec<Date>,
}

impl WorkSchedule {
    /// Walks `range` one day at a time, keeping the days whose cycle
    /// position falls inside the work block.
    pub fn generate(range: DateRange, pattern: CyclePattern) -> Self {
        let _span = debug_span!(
            "generate_rota",
            %range,
            work = pattern.work_length(),
            off = pattern.off_length()
        )
        .entered();

        let work = u64::from(pattern.work_length());
        let cycle = pattern.cycle_length();

        let mut dates = Vec::new();
        let mut position = 0u64;
        for day in range.iter_days() {
            if position < work {
                dates.push(day);
            }
            position = (position + 1) % cycle;
        }

        debug!(
            days_in_range = range.len_days(),
            work_days = dates.len(),
            "rota generated"
        );

        Self {
            range,
            pattern,
            dates,
        }
    }

    /// The scanned range.
    #[inline]
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// The cycle the rota was generated from.
    #[inline]
    pub fn pattern(&self) -> CyclePattern {
        self.pattern
    }

    /// Work days in ascending order.
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Number of work days.
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the rota holds no work days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First work day, if any.
    #[inline]
    pub fn first(&self) -> Option<Date> {
        self.dates.first().copied()
    }

    /// Last work day, if any.
    #[inline]
    pub fn last(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Whether `date` is a work day of this rota.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    /// Returns an iterator over the work days.
    pub fn iter(&self) -> impl Iterator<Item = &Date> {
        self.dates.iter()
    }

    /// Days of the range that are not work days, ascending.
    pub fn off_days(&self) -> Vec<Date> {
        self.range
            .iter_days()
            .filter(|day| !self.contains(*day))
            .collect()
    }

    /// Work days rendered as DD-MM-YYYY.
    pub fn format_dates(&self) -> Vec<String> {
        self.dates.iter().map(Date::to_dmy_string).collect()
    }

    /// Consumes the rota, returning its work days.
    pub fn into_dates(self) -> Vec<Date> {
        self.dates
    }
}

/// Builder for rotas with flexible configuration.
///
/// `off_days` defaults to 0 (every day in range is worked).
///
/// # Examples
///
/// ```
/// use calendar_schedules::schedules::RotaBuilder;
/// use calendar_core::types::Date;
///
/// let rota = RotaBuilder::new()
///     .start(Date::from_ymd(2024, 3, 1).unwrap())
///     .end(Date::from_ymd(2024, 3, 31).unwrap())
///     .work_days(4)
///     .off_days(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(rota.len(), 19);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RotaBuilder {
    start: Option<Date>,
    end: Option<Date>,
    work_days: Option<i64>,
    off_days: i64,
}

impl RotaBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first day of the range.
    pub fn start(mut self, date: Date) -> Self {
        self.start = Some(date);
        self
    }

    /// Sets the last day of the range.
    pub fn end(mut self, date: Date) -> Self {
        self.end = Some(date);
        self
    }

    /// Sets the work block length.
    pub fn work_days(mut self, days: i64) -> Self {
        self.work_days = Some(days);
        self
    }

    /// Sets the off block length.
    pub fn off_days(mut self, days: i64) -> Self {
        self.off_days = days;
        self
    }

    /// Builds the rota.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidArgument` if:
    /// - Start date, end date, or work block length is missing
    /// - The cycle lengths are rejected by [`CyclePattern::new`]
    pub fn build(self) -> Result<WorkSchedule, ScheduleError> {
        let start = self.start.ok_or_else(|| missing("start"))?;
        let end = self.end.ok_or_else(|| missing("end"))?;
        let work_days = self.work_days.ok_or_else(|| missing("work_days"))?;

        let pattern = CyclePattern::new(work_days, self.off_days)?;
        Ok(WorkSchedule::generate(DateRange::new(start, end), pattern))
    }
}

fn missing(field: &str) -> ScheduleError {
    ScheduleError::invalid_argument(format!("missing required field: {}", field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dmy(s: &str) -> Date {
        Date::parse_dmy(s).unwrap()
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(dmy(start), dmy(end))
    }

    fn dmy_strings(dates: &[Date]) -> Vec<String> {
        dates.iter().map(Date::to_dmy_string).collect()
    }

    #[test]
    fn test_one_on_three_off() {
        let dates = generate_schedule(range("01-01-2024", "15-01-2024"), 1, 3).unwrap();
        assert_eq!(
            dmy_strings(&dates),
            vec!["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]
        );
    }

    #[test]
    fn test_alternate_days() {
        let dates = generate_schedule(range("01-01-2024", "10-01-2024"), 1, 1).unwrap();
        assert_eq!(
            dmy_strings(&dates),
            vec![
                "01-01-2024",
                "03-01-2024",
                "05-01-2024",
                "07-01-2024",
                "09-01-2024"
            ]
        );
    }

    #[test]
    fn test_multi_day_work_block() {
        let dates = generate_schedule(range("28-02-2024", "08-03-2024"), 2, 3).unwrap();
        assert_eq!(
            dmy_strings(&dates),
            vec!["28-02-2024", "29-02-2024", "04-03-2024", "05-03-2024"]
        );
    }

    #[test]
    fn test_zero_off_emits_every_day() {
        let r = range("30-12-2023", "02-01-2024");
        let dates = generate_schedule(r, 3, 0).unwrap();
        assert_eq!(dates, r.iter_days().collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_work_is_rejected() {
        let result = generate_schedule(range("01-01-2024", "10-01-2024"), 0, 3);
        assert!(matches!(result, Err(ScheduleError::InvalidArgument { .. })));
    }

    #[test]
    fn test_negative_off_is_rejected() {
        let result = generate_schedule(range("01-01-2024", "10-01-2024"), 1, -1);
        assert!(matches!(result, Err(ScheduleError::InvalidArgument { .. })));
    }

    #[test]
    fn test_single_day_range() {
        let dates = generate_schedule(range("29-02-2024", "29-02-2024"), 1, 6).unwrap();
        assert_eq!(dates, vec![dmy("29-02-2024")]);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let dates = generate_schedule(range("15-01-2024", "01-01-2024"), 1, 3).unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_cycle_anchored_at_range_start() {
        // Same pattern, ranges one day apart: the first day is always worked
        let a = generate_schedule(range("01-01-2024", "10-01-2024"), 1, 1).unwrap();
        let b = generate_schedule(range("02-01-2024", "10-01-2024"), 1, 1).unwrap();
        assert_eq!(a[0], dmy("01-01-2024"));
        assert_eq!(b[0], dmy("02-01-2024"));
        assert!(a.iter().all(|d| !b.contains(d)));
    }

    #[test]
    fn test_work_schedule_accessors() {
        let r = range("01-01-2024", "15-01-2024");
        let rota = WorkSchedule::generate(r, CyclePattern::new(1, 3).unwrap());

        assert_eq!(rota.range(), r);
        assert_eq!(rota.pattern(), CyclePattern::new(1, 3).unwrap());
        assert_eq!(rota.len(), 4);
        assert!(!rota.is_empty());
        assert_eq!(rota.first(), Some(dmy("01-01-2024")));
        assert_eq!(rota.last(), Some(dmy("13-01-2024")));
        assert_eq!(rota.iter().count(), 4);
        assert_eq!(
            rota.format_dates(),
            vec!["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]
        );
    }

    #[test]
    fn test_off_days_complement() {
        let r = range("01-01-2024", "10-01-2024");
        let rota = WorkSchedule::generate(r, CyclePattern::new(1, 1).unwrap());
        let off = rota.off_days();

        assert_eq!(
            dmy_strings(&off),
            vec![
                "02-01-2024",
                "04-01-2024",
                "06-01-2024",
                "08-01-2024",
                "10-01-2024"
            ]
        );
        assert_eq!((rota.len() + off.len()) as u64, r.len_days());
    }

    #[test]
    fn test_empty_rota_accessors() {
        let rota = WorkSchedule::generate(
            range("02-01-2024", "01-01-2024"),
            CyclePattern::every_day(),
        );
        assert!(rota.is_empty());
        assert_eq!(rota.first(), None);
        assert_eq!(rota.last(), None);
        assert!(rota.off_days().is_empty());
    }

    // RotaBuilder tests

    #[test]
    fn test_builder_four_on_three_off() {
        let rota = RotaBuilder::new()
            .start(dmy("04-03-2024"))
            .end(dmy("17-03-2024"))
            .work_days(4)
            .off_days(3)
            .build()
            .unwrap();

        assert_eq!(
            rota.format_dates(),
            vec![
                "04-03-2024",
                "05-03-2024",
                "06-03-2024",
                "07-03-2024",
                "11-03-2024",
                "12-03-2024",
                "13-03-2024",
                "14-03-2024"
            ]
        );
    }

    #[test]
    fn test_builder_default_off_days() {
        let rota = RotaBuilder::new()
            .start(dmy("01-01-2024"))
            .end(dmy("07-01-2024"))
            .work_days(2)
            .build()
            .unwrap();
        assert_eq!(rota.len(), 7);
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = RotaBuilder::new().end(dmy("01-01-2024")).work_days(1).build();
        assert_eq!(
            result,
            Err(ScheduleError::invalid_argument("missing required field: start"))
        );

        let result = RotaBuilder::new()
            .start(dmy("01-01-2024"))
            .work_days(1)
            .build();
        assert_eq!(
            result,
            Err(ScheduleError::invalid_argument("missing required field: end"))
        );

        let result = RotaBuilder::new()
            .start(dmy("01-01-2024"))
            .end(dmy("02-01-2024"))
            .build();
        assert_eq!(
            result,
            Err(ScheduleError::invalid_argument(
                "missing required field: work_days"
            ))
        );
    }

    #[test]
    fn test_builder_rejects_invalid_pattern() {
        let result = RotaBuilder::new()
            .start(dmy("01-01-2024"))
            .end(dmy("02-01-2024"))
            .work_days(0)
            .build();
        assert!(matches!(result, Err(ScheduleError::InvalidArgument { .. })));
    }
}
