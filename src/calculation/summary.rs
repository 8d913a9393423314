//! Building an experience summary from raw or typed periods.
//!
//! A summary calculates every period independently, keeps invalid periods
//! in the output with a zero duration and a warning, and totals all period
//! durations with [`sum_durations`](super::sum_durations).

use tracing::debug;

use crate::config::DateSettings;
use crate::error::EngineResult;
use crate::models::{Duration, DurationLabels, ExperiencePeriod, ExperienceSummary, PeriodDuration};

use super::duration_calculator::try_calculate_duration;

/// Calculates one period from textual dates.
///
/// Dates are parsed with the configured input formats. If either date is
/// unparseable or the range is inverted, the period gets
/// [`Duration::ZERO`] and a warning instead of failing.
///
/// # Example
///
/// ```
/// use experience_engine::calculation::calculate_period;
/// use experience_engine::config::DateSettings;
/// use experience_engine::models::{Duration, DurationLabels};
///
/// let dates = DateSettings::default();
/// let labels = DurationLabels::default();
///
/// let period = calculate_period(None, "2023-01-15", "2023-03-10", &dates, &labels);
/// assert_eq!(period.duration, Duration::new(0, 1, 24));
/// assert_eq!(period.start_display.as_deref(), Some("15/01/2023"));
///
/// let broken = calculate_period(None, "someday", "2023-03-10", &dates, &labels);
/// assert!(broken.duration.is_zero());
/// assert!(broken.warning.is_some());
/// ```
pub fn calculate_period(
    id: Option<String>,
    start: &str,
    end: &str,
    dates: &DateSettings,
    labels: &DurationLabels,
) -> PeriodDuration {
    let start_date = dates.parse(start);
    let end_date = dates.parse(end);

    let result = match (&start_date, &end_date) {
        (Ok(start), Ok(end)) => try_calculate_duration(*start, *end),
        (Err(err), _) | (_, Err(err)) => Err(err.clone()),
    };

    let start_date = start_date.ok();
    let end_date = end_date.ok();
    build_period(id, start_date, end_date, result, dates, labels)
}

/// Calculates one typed period.
pub fn calculate_experience_period(
    period: &ExperiencePeriod,
    dates: &DateSettings,
    labels: &DurationLabels,
) -> PeriodDuration {
    build_period(
        Some(period.id.clone()),
        Some(period.start_date),
        Some(period.end_date),
        period.try_duration(),
        dates,
        labels,
    )
}

fn build_period(
    id: Option<String>,
    start_date: Option<chrono::NaiveDate>,
    end_date: Option<chrono::NaiveDate>,
    result: EngineResult<Duration>,
    dates: &DateSettings,
    labels: &DurationLabels,
) -> PeriodDuration {
    let (duration, warning) = match result {
        Ok(duration) => (duration, None),
        Err(err) => {
            debug!(period_id = ?id, error = %err, "Period counted as zero");
            (Duration::ZERO, Some(err.to_string()))
        }
    };

    PeriodDuration {
        id,
        start_date,
        end_date,
        start_display: start_date.map(|d| dates.display(d)),
        end_display: end_date.map(|d| dates.display(d)),
        duration,
        display: duration.format_with(labels),
        warning,
    }
}

/// Totals already-calculated periods into a summary.
///
/// # Example
///
/// ```
/// use experience_engine::calculation::{calculate_period, summarize_periods};
/// use experience_engine::config::DateSettings;
/// use experience_engine::models::{Duration, DurationLabels};
///
/// let dates = DateSettings::default();
/// let labels = DurationLabels::default();
/// let periods = vec![
///     calculate_period(None, "2020-01-01", "2020-12-31", &dates, &labels),
///     calculate_period(None, "2021-02-01", "2021-02-28", &dates, &labels),
/// ];
///
/// let summary = summarize_periods(periods, &labels);
/// assert_eq!(summary.total, Duration::new(1, 1, 0));
/// assert_eq!(summary.total_display, "1 year, 1 month, 0 days");
/// ```
pub fn summarize_periods(periods: Vec<PeriodDuration>, labels: &DurationLabels) -> ExperienceSummary {
    let total: Duration = periods.iter().map(|p| &p.duration).sum();
    let total_display = total.format_with(labels);
    ExperienceSummary::new(periods, total, total_display)
}

/// Calculates and totals typed periods.
pub fn summarize_experience(
    periods: &[ExperiencePeriod],
    dates: &DateSettings,
    labels: &DurationLabels,
) -> ExperienceSummary {
    let calculated = periods
        .iter()
        .map(|period| calculate_experience_period(period, dates, labels))
        .collect();
    summarize_periods(calculated, labels)
}
