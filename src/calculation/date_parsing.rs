//! Calendar date parsing and display formatting.
//!
//! Dates enter the engine as text. This module turns that text into a
//! [`NaiveDate`] without ever consulting a timezone, and renders dates back
//! into the display format so they round-trip to the same calendar day.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Formats tried, in order, when no other formats are configured.
pub const DEFAULT_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// The `DD/MM/YYYY` display format.
pub const DEFAULT_DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parses a calendar date using [`DEFAULT_INPUT_FORMATS`].
///
/// # Example
///
/// ```
/// use experience_engine::calculation::parse_calendar_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// assert_eq!(parse_calendar_date("2023-01-15").unwrap(), expected);
/// assert_eq!(parse_calendar_date("15/01/2023").unwrap(), expected);
/// assert_eq!(parse_calendar_date("2023-01-15T23:30:00-05:00").unwrap(), expected);
/// assert!(parse_calendar_date("not a date").is_err());
/// ```
pub fn parse_calendar_date(input: &str) -> EngineResult<NaiveDate> {
    parse_calendar_date_with(input, &DEFAULT_INPUT_FORMATS)
}

/// Parses a calendar date, trying each of `formats` in order.
///
/// Surrounding whitespace is ignored. When none of the formats match, an ISO
/// 8601 datetime such as `2023-01-15T10:00:00Z` is accepted by taking its
/// date part as written; the time and offset are discarded, never applied.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] when the input is empty or matches
/// no format.
pub fn parse_calendar_date_with<S: AsRef<str>>(
    input: &str,
    formats: &[S],
) -> EngineResult<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidDate {
            input: input.to_string(),
            message: "date is empty".to_string(),
        });
    }

    if let Some(date) = formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format.as_ref()).ok())
    {
        return Ok(date);
    }

    if let Some((date_part, _time)) = trimmed.split_once('T') {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            return Ok(date);
        }
    }

    Err(EngineError::InvalidDate {
        input: input.to_string(),
        message: format!(
            "expected one of: {}",
            formats
                .iter()
                .map(|format| format.as_ref())
                .collect::<Vec<&str>>()
                .join(", ")
        ),
    })
}

/// Renders a date with a strftime-style format.
///
/// The format must be one accepted by [`is_valid_format`]; configuration
/// loading rejects anything else before it reaches this function.
///
/// # Example
///
/// ```
/// use experience_engine::calculation::{format_display_date, DEFAULT_DISPLAY_FORMAT};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(format_display_date(date, DEFAULT_DISPLAY_FORMAT), "29/02/2024");
/// ```
pub fn format_display_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Returns `true` when `format` is a non-empty strftime format that can
/// render a date on its own.
///
/// Formats with unknown specifiers, or with time or offset fields a date
/// cannot supply, are rejected.
pub fn is_valid_format(format: &str) -> bool {
    if format.trim().is_empty() {
        return false;
    }

    let probe = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    let mut rendered = String::new();
    write!(rendered, "{}", probe.format(format)).is_ok()
}
