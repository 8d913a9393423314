//! Experience period model.
//!
//! This module contains the [`ExperiencePeriod`] type: one stretch of time,
//! such as a job, bounded by a start and end date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{calculate_duration, try_calculate_duration};
use crate::error::EngineResult;

use super::Duration;

/// A period of experience between two calendar dates.
///
/// Both dates are inclusive. The `id` is opaque to the calculations and is
/// only carried through so callers can match results back to their input.
///
/// # Example
///
/// ```
/// use experience_engine::models::{Duration, ExperiencePeriod};
/// use chrono::NaiveDate;
///
/// let period = ExperiencePeriod::new(
///     NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 3, 10).unwrap(),
/// );
///
/// assert_eq!(period.duration(), Duration::new(0, 1, 24));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperiencePeriod {
    /// Opaque identifier for the period.
    pub id: String,
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ExperiencePeriod {
    /// Creates a period with a freshly generated identifier.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), start_date, end_date)
    }

    /// Creates a period with a caller-supplied identifier.
    pub fn with_id(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
        }
    }

    /// Returns the elapsed duration of the period, or the zero duration when
    /// the period is inverted.
    pub fn duration(&self) -> Duration {
        calculate_duration(self.start_date, self.end_date)
    }

    /// Returns the elapsed duration of the period, reporting why it could not
    /// be calculated.
    pub fn try_duration(&self) -> EngineResult<Duration> {
        try_calculate_duration(self.start_date, self.end_date)
    }
}
