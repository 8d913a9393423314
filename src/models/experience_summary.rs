//! Summary models for a set of experience periods.
//!
//! This module contains the [`ExperienceSummary`] type and the per-period
//! [`PeriodDuration`] entries it is built from.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Duration;

/// The calculated duration of a single period.
///
/// A period whose dates could not be used still appears here, with a zero
/// duration and a `warning` describing the problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodDuration {
    /// The caller's identifier for the period, if one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The parsed start date, when it could be parsed.
    pub start_date: Option<NaiveDate>,
    /// The parsed end date, when it could be parsed.
    pub end_date: Option<NaiveDate>,
    /// The start date in display format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_display: Option<String>,
    /// The end date in display format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_display: Option<String>,
    /// The elapsed duration, inclusive of the end date.
    pub duration: Duration,
    /// The duration rendered with the configured labels.
    pub display: String,
    /// Why the period contributed a zero duration, if it did so because of
    /// invalid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// The complete result of summarizing a set of periods.
///
/// # Example
///
/// ```
/// use experience_engine::models::{Duration, ExperienceSummary};
///
/// let summary = ExperienceSummary::new(vec![], Duration::ZERO, "0 years, 0 months, 0 days");
/// assert!(summary.periods.is_empty());
/// assert!(summary.total.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSummary {
    /// Unique identifier for this summary.
    pub summary_id: Uuid,
    /// When the summary was calculated.
    pub calculated_at: DateTime<Utc>,
    /// The per-period durations, in input order.
    pub periods: Vec<PeriodDuration>,
    /// The normalized sum of every period duration.
    pub total: Duration,
    /// The total rendered with the configured labels.
    pub total_display: String,
}

impl ExperienceSummary {
    /// Creates a summary stamped with a new identifier and the current time.
    pub fn new(
        periods: Vec<PeriodDuration>,
        total: Duration,
        total_display: impl Into<String>,
    ) -> Self {
        Self {
            summary_id: Uuid::new_v4(),
            calculated_at: Utc::now(),
            periods,
            total,
            total_display: total_display.into(),
        }
    }

    /// Returns the periods that carry a warning.
    pub fn rejected_periods(&self) -> impl Iterator<Item = &PeriodDuration> {
        self.periods.iter().filter(|p| p.warning.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(duration: Duration, warning: Option<&str>) -> PeriodDuration {
        PeriodDuration {
            id: Some("p".to_string()),
            start_date: None,
            end_date: None,
            start_display: None,
            end_display: None,
            duration,
            display: duration.to_string(),
            warning: warning.map(str::to_string),
        }
    }

    #[test]
    fn test_rejected_periods_only_returns_warned_entries() {
        let summary = ExperienceSummary::new(
            vec![
                period(Duration::new(0, 1, 0), None),
                period(Duration::ZERO, Some("Invalid date 'x'")),
            ],
            Duration::new(0, 1, 0),
            "0 years, 1 month, 0 days",
        );
        let rejected: Vec<_> = summary.rejected_periods().collect();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].warning.as_deref(), Some("Invalid date 'x'"));
    }

    #[test]
    fn test_serialize_skips_absent_optional_fields() {
        let mut entry = period(Duration::new(1, 0, 0), None);
        entry.id = None;
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("warning"));
        assert!(!json.contains("start_display"));
        assert!(json.contains("\"start_date\":null"));
    }

    #[test]
    fn test_new_summaries_have_distinct_ids() {
        let a = ExperienceSummary::new(vec![], Duration::ZERO, "");
        let b = ExperienceSummary::new(vec![], Duration::ZERO, "");
        assert_ne!(a.summary_id, b.summary_id);
    }
}
