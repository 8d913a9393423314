//! The calendar duration value type.
//!
//! This module contains the [`Duration`] type produced by both the duration
//! calculator and the duration aggregator, and the [`DurationLabels`] used
//! to render it as text.

use serde::{Deserialize, Serialize};

/// An elapsed span of calendar time expressed as years, months and days.
///
/// A `Duration` is a plain value: every calculation produces a fresh one and
/// nothing ever mutates it afterwards. Durations returned by the calculator
/// and the aggregator always have `months` in `0..=11`.
///
/// This is a calendar duration, not a fixed-length one. "One month" has no
/// fixed number of days, so there is no conversion to `std::time::Duration`.
///
/// # Example
///
/// ```
/// use experience_engine::models::Duration;
///
/// let duration = Duration::new(1, 2, 5);
/// assert_eq!(duration.to_string(), "1 year, 2 months, 5 days");
/// assert!(Duration::ZERO.is_zero());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    /// Whole years.
    pub years: u32,
    /// Whole months beyond the years.
    pub months: u32,
    /// Remaining days beyond the months.
    pub days: u32,
}

impl Duration {
    /// The empty duration, `{0, 0, 0}`.
    pub const ZERO: Duration = Duration {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a duration from its components without normalizing them.
    pub const fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Returns `true` when every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Renders the duration using the given unit labels.
    ///
    /// Each component uses the singular label when it equals one and the
    /// plural label otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use experience_engine::models::{Duration, DurationLabels};
    ///
    /// let labels = DurationLabels {
    ///     year: "ano".to_string(),
    ///     years: "anos".to_string(),
    ///     month: "mês".to_string(),
    ///     months: "meses".to_string(),
    ///     day: "dia".to_string(),
    ///     days: "dias".to_string(),
    /// };
    /// assert_eq!(Duration::new(2, 1, 0).format_with(&labels), "2 anos, 1 mês, 0 dias");
    /// ```
    pub fn format_with(&self, labels: &DurationLabels) -> String {
        format!(
            "{} {}, {} {}, {} {}",
            self.years,
            pick(self.years, &labels.year, &labels.years),
            self.months,
            pick(self.months, &labels.month, &labels.months),
            self.days,
            pick(self.days, &labels.day, &labels.days),
        )
    }
}

fn pick<'a>(value: u32, singular: &'a str, plural: &'a str) -> &'a str {
    if value == 1 { singular } else { plural }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_with(&DurationLabels::default()))
    }
}

/// Text labels for the units of a [`Duration`].
///
/// Missing fields fall back to the English defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationLabels {
    /// Singular label for years.
    pub year: String,
    /// Plural label for years.
    pub years: String,
    /// Singular label for months.
    pub month: String,
    /// Plural label for months.
    pub months: String,
    /// Singular label for days.
    pub day: String,
    /// Plural label for days.
    pub days: String,
}

impl DurationLabels {
    /// Returns every label paired with its field name.
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("year", &self.year),
            ("years", &self.years),
            ("month", &self.month),
            ("months", &self.months),
            ("day", &self.day),
            ("days", &self.days),
        ]
    }
}

impl Default for DurationLabels {
    fn default() -> Self {
        Self {
            year: "year".to_string(),
            years: "years".to_string(),
            month: "month".to_string(),
            months: "months".to_string(),
            day: "day".to_string(),
            days: "days".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_default() {
        assert_eq!(Duration::default(), Duration::ZERO);
        assert!(Duration::default().is_zero());
    }

    #[test]
    fn test_non_zero_duration_is_not_zero() {
        assert!(!Duration::new(0, 0, 1).is_zero());
        assert!(!Duration::new(0, 1, 0).is_zero());
        assert!(!Duration::new(1, 0, 0).is_zero());
    }

    #[test]
    fn test_display_uses_plural_labels() {
        assert_eq!(
            Duration::new(3, 4, 12).to_string(),
            "3 years, 4 months, 12 days"
        );
    }

    #[test]
    fn test_display_uses_singular_labels_for_one() {
        assert_eq!(Duration::new(1, 1, 1).to_string(), "1 year, 1 month, 1 day");
    }

    #[test]
    fn test_display_of_zero_duration() {
        assert_eq!(Duration::ZERO.to_string(), "0 years, 0 months, 0 days");
    }

    #[test]
    fn test_serializes_as_plain_integers() {
        let json = serde_json::to_value(Duration::new(1, 2, 5)).unwrap();
        assert_eq!(json, serde_json::json!({"years": 1, "months": 2, "days": 5}));
    }

    #[test]
    fn test_labels_deserialize_with_defaults_for_missing_fields() {
        let labels: DurationLabels = serde_yaml::from_str("year: jaar\nyears: jaren\n").unwrap();
        assert_eq!(labels.year, "jaar");
        assert_eq!(labels.years, "jaren");
        assert_eq!(labels.months, "months");
    }
}
