//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::is_valid_format;
use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

/// Loads, validates and provides access to the engine configuration.
///
/// # File Format
///
/// ```yaml
/// server:
///   host: 127.0.0.1
///   port: 3000
/// dates:
///   input_formats: ["%Y-%m-%d", "%d/%m/%Y"]
///   display_format: "%d/%m/%Y"
/// labels:
///   year: year
///   years: years
///   month: month
///   months: months
///   day: day
///   days: days
/// ```
///
/// # Example
///
/// ```no_run
/// use experience_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./engine.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address());
/// # Ok::<(), experience_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read.
    /// - [`EngineError::ConfigParseError`] if the file is not valid YAML or
    ///   has fields of the wrong type.
    /// - [`EngineError::InvalidConfig`] if a value is unusable.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(path = %path_str, "Loaded engine configuration");
        Ok(loader)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigLoader::load`], except that the file cannot be
    /// missing. Parse errors report `<inline>` as their path. Blank text
    /// yields the default configuration.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Validates an already-built configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if a value is unusable.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        validate(&config)?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

fn validate(config: &EngineConfig) -> EngineResult<()> {
    if config.dates.input_formats.is_empty() {
        return Err(invalid(
            "dates.input_formats",
            "at least one format is required",
        ));
    }

    if let Some(bad) = config
        .dates
        .input_formats
        .iter()
        .find(|format| !is_valid_format(format))
    {
        return Err(invalid(
            "dates.input_formats",
            format!("'{}' is not a valid date format", bad),
        ));
    }

    if !is_valid_format(&config.dates.display_format) {
        return Err(invalid(
            "dates.display_format",
            format!(
                "'{}' is not a valid date format",
                config.dates.display_format
            ),
        ));
    }

    if let Some((name, _)) = config
        .labels
        .entries()
        .into_iter()
        .find(|(_, label)| label.trim().is_empty())
    {
        return Err(invalid(
            &format!("labels.{}", name),
            "label cannot be empty",
        ));
    }

    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        field: field.to_string(),
        message: message.into(),
    }
}
