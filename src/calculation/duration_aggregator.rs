//! Summing many durations into one normalized total.
//!
//! Durations are added component-wise, then normalized: days overflow into
//! months using a fixed 30-day month, then months overflow into years.
//!
//! The 30-day month is an approximation. Once durations from different
//! periods are added together the total is no longer attached to any
//! calendar position, so there is no "actual" month length to normalize
//! against. The calculator's per-period results are exact; only the total
//! carries this rounding.

use std::iter::Sum;

use crate::models::Duration;

/// Days that make up one month when normalizing an aggregate.
pub const DAYS_PER_AGGREGATE_MONTH: u64 = 30;

/// Months in a year.
pub const MONTHS_PER_YEAR: u64 = 12;

/// Sums durations and normalizes the result.
///
/// The result always has `months` in `0..=11` and `days` in `0..=29`. Years
/// saturate at `u32::MAX`. Inputs are not validated and the order they are
/// supplied in does not affect the result.
///
/// # Example
///
/// ```
/// use experience_engine::calculation::sum_durations;
/// use experience_engine::models::Duration;
///
/// let total = sum_durations([Duration::new(0, 11, 25), Duration::new(0, 2, 10)]);
/// assert_eq!(total, Duration::new(1, 2, 5));
///
/// assert_eq!(sum_durations(Vec::<Duration>::new()), Duration::ZERO);
/// ```
pub fn sum_durations<I>(durations: I) -> Duration
where
    I: IntoIterator<Item = Duration>,
{
    let (years, months, days) =
        durations
            .into_iter()
            .fold((0u64, 0u64, 0u64), |(years, months, days), duration| {
                (
                    years.saturating_add(u64::from(duration.years)),
                    months.saturating_add(u64::from(duration.months)),
                    days.saturating_add(u64::from(duration.days)),
                )
            });

    // days first: a day overflow can push months past a year
    let months = months.saturating_add(days / DAYS_PER_AGGREGATE_MONTH);
    let days = days % DAYS_PER_AGGREGATE_MONTH;

    let years = years.saturating_add(months / MONTHS_PER_YEAR);
    let months = months % MONTHS_PER_YEAR;

    Duration::new(
        u32::try_from(years).unwrap_or(u32::MAX),
        months as u32,
        days as u32,
    )
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        sum_durations(iter)
    }
}

impl<'a> Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Duration>>(iter: I) -> Self {
        sum_durations(iter.copied())
    }
}
