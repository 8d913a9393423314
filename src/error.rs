//! Error types for the Experience Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while parsing dates, calculating
//! durations, and loading configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Experience Engine.
///
/// The explicit-result calculation functions and the configuration loader
/// return this error type. The compatibility calculation functions never
/// surface it; they collapse every failure to the zero duration.
///
/// # Example
///
/// ```
/// use experience_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A date string could not be parsed with any accepted format.
    #[error("Invalid date '{input}': {message}")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
        /// A description of why parsing failed.
        message: String,
    },

    /// The start date falls after the end date.
    #[error("Start date {start} is after end date {end}")]
    InvertedRange {
        /// The start date of the range.
        start: NaiveDate,
        /// The end date of the range.
        end: NaiveDate,
    },

    /// The end date cannot be advanced by a day to make it inclusive.
    #[error("Date {date} is outside the supported calendar range")]
    DateOutOfRange {
        /// The date that could not be advanced.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but contains an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_displays_input_and_message() {
        let error = EngineError::InvalidDate {
            input: "2023-13-01".to_string(),
            message: "no accepted format matched".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '2023-13-01': no accepted format matched"
        );
    }

    #[test]
    fn test_inverted_range_displays_both_dates() {
        let error = EngineError::InvertedRange {
            start: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Start date 2024-05-02 is after end date 2024-05-01"
        );
    }

    #[test]
    fn test_date_out_of_range_displays_date() {
        let error = EngineError::DateOutOfRange {
            date: NaiveDate::MAX,
        };
        assert!(error.to_string().contains("outside the supported calendar range"));
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "dates.input_formats".to_string(),
            message: "at least one format is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration field 'dates.input_formats': at least one format is required"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
