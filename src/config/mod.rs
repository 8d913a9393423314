//! Configuration loading and management for the Experience Engine.
//!
//! This module loads the engine configuration from a YAML file: where the
//! HTTP service listens, which date formats are accepted and displayed, and
//! the labels used to render durations.
//!
//! # Example
//!
//! ```no_run
//! use experience_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./engine.yaml").unwrap();
//! println!("Display format: {}", loader.config().dates.display_format);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DateSettings, EngineConfig, ServerSettings};
