//! Calendar-accurate duration between two dates.
//!
//! This module computes the years, months and days elapsed from a start
//! date through an end date, counting the end date as a full day.
//!
//! Chrono has no year/month/day difference, so the calendar borrowing is
//! done here: a day deficit borrows the actual length of the month before
//! the end date, and a month deficit borrows a year.
//!
//! Two layers are provided. The `try_` functions report why a duration
//! could not be calculated. The plain functions never fail: every invalid
//! input (an unparseable date, a start after the end) produces
//! [`Duration::ZERO`], which is what callers that display the value
//! directly rely on.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Duration;

use super::date_parsing::{DEFAULT_INPUT_FORMATS, parse_calendar_date_with};

/// Length of the calendar month immediately before the month of `date`.
fn days_in_preceding_month(date: NaiveDate) -> Option<u32> {
    date.with_day(1)?.pred_opt().map(|last| last.day())
}

/// Calculates the elapsed duration from `start` through `end` inclusive.
///
/// The end date is advanced by one day and the difference is taken
/// component-wise. A negative day component borrows the length of the month
/// preceding the advanced end date; a negative month component borrows a
/// year.
///
/// Borrowing can still leave the day component negative when the start day
/// exceeds the borrowed month's length by more than the adjusted end day
/// (January 31st through February 28th). The days are then counted from the
/// borrowed month's last day instead.
///
/// # Errors
///
/// - [`EngineError::InvertedRange`] if `start` is after `end`.
/// - [`EngineError::DateOutOfRange`] if `end` is the last date chrono can
///   represent.
///
/// # Example
///
/// ```
/// use experience_engine::calculation::try_calculate_duration;
/// use experience_engine::models::Duration;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2023, 3, 10).unwrap();
/// assert_eq!(try_calculate_duration(start, end).unwrap(), Duration::new(0, 1, 24));
/// assert!(try_calculate_duration(end, start).is_err());
/// ```
pub fn try_calculate_duration(start: NaiveDate, end: NaiveDate) -> EngineResult<Duration> {
    if start > end {
        return Err(EngineError::InvertedRange { start, end });
    }

    let end = end
        .succ_opt()
        .ok_or(EngineError::DateOutOfRange { date: end })?;

    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    if days < 0 {
        months -= 1;
        let borrowed =
            days_in_preceding_month(end).ok_or(EngineError::DateOutOfRange { date: end })?;
        days += borrowed as i32;
        if days < 0 {
            days = end.day() as i32;
        }
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    // start <= end leaves every component non-negative here
    Ok(Duration::new(years as u32, months as u32, days as u32))
}

/// Calculates the elapsed duration from `start` through `end` inclusive,
/// returning [`Duration::ZERO`] when it cannot be calculated.
///
/// # Example
///
/// ```
/// use experience_engine::calculation::calculate_duration;
/// use experience_engine::models::Duration;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(calculate_duration(day, day), Duration::new(0, 0, 1));
///
/// let before = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
/// assert_eq!(calculate_duration(day, before), Duration::ZERO);
/// ```
pub fn calculate_duration(start: NaiveDate, end: NaiveDate) -> Duration {
    collapse(try_calculate_duration(start, end))
}

/// Parses both dates with [`DEFAULT_INPUT_FORMATS`] and calculates the
/// duration between them.
///
/// # Errors
///
/// [`EngineError::InvalidDate`] for an unparseable date, plus every error
/// [`try_calculate_duration`] returns.
pub fn try_calculate_duration_from_str(start: &str, end: &str) -> EngineResult<Duration> {
    try_calculate_duration_with_formats(start, end, &DEFAULT_INPUT_FORMATS)
}

/// Parses both dates with the given formats and calculates the duration
/// between them.
///
/// # Errors
///
/// Same as [`try_calculate_duration_from_str`].
pub fn try_calculate_duration_with_formats<S: AsRef<str>>(
    start: &str,
    end: &str,
    formats: &[S],
) -> EngineResult<Duration> {
    let start = parse_calendar_date_with(start, formats)?;
    let end = parse_calendar_date_with(end, formats)?;
    try_calculate_duration(start, end)
}

/// Parses both dates and calculates the duration between them, returning
/// [`Duration::ZERO`] for unparseable dates or an inverted range.
///
/// # Example
///
/// ```
/// use experience_engine::calculation::calculate_duration_from_str;
/// use experience_engine::models::Duration;
///
/// assert_eq!(calculate_duration_from_str("2023-01-15", "2023-03-10"), Duration::new(0, 1, 24));
/// assert_eq!(calculate_duration_from_str("garbage", "2023-03-10"), Duration::ZERO);
/// assert_eq!(calculate_duration_from_str("2023-03-10", "2023-01-15"), Duration::ZERO);
/// ```
pub fn calculate_duration_from_str(start: &str, end: &str) -> Duration {
    collapse(try_calculate_duration_from_str(start, end))
}

fn collapse(result: EngineResult<Duration>) -> Duration {
    result.unwrap_or_else(|err| {
        debug!(error = %err, "Duration not calculable, using zero");
        Duration::ZERO
    })
}
