//! Configuration types for the Experience Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from a YAML configuration file. Every section and field
//! is optional; omitted values take the defaults defined here.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::calculation::{
    DEFAULT_DISPLAY_FORMAT, DEFAULT_INPUT_FORMATS, format_display_date, parse_calendar_date_with,
};
use crate::error::EngineResult;
use crate::models::DurationLabels;

/// Where the HTTP service listens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// The interface to bind to.
    pub host: String,
    /// The TCP port to bind to.
    pub port: u16,
}

impl ServerSettings {
    /// Returns the `host:port` address to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// How dates are read from and written to text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DateSettings {
    /// strftime formats accepted for input dates, tried in order.
    pub input_formats: Vec<String>,
    /// strftime format used to display dates.
    pub display_format: String,
}

impl DateSettings {
    /// Parses a date using the configured input formats.
    pub fn parse(&self, input: &str) -> EngineResult<NaiveDate> {
        parse_calendar_date_with(input, &self.input_formats)
    }

    /// Renders a date using the configured display format.
    pub fn display(&self, date: NaiveDate) -> String {
        format_display_date(date, &self.display_format)
    }
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            input_formats: DEFAULT_INPUT_FORMATS.iter().map(|f| f.to_string()).collect(),
            display_format: DEFAULT_DISPLAY_FORMAT.to_string(),
        }
    }
}

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use experience_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.server.port, 3000);
/// assert_eq!(config.dates.display_format, "%d/%m/%Y");
/// assert_eq!(config.labels.years, "years");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// HTTP server settings.
    pub server: ServerSettings,
    /// Date parsing and display settings.
    pub dates: DateSettings,
    /// Labels for rendering durations.
    pub labels: DurationLabels,
}
