//! Application state for the Experience Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, EngineConfig};

/// Shared application state.
///
/// Holds the loaded configuration, which is read-only for the lifetime of
/// the server.
#[derive(Clone, Default)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        self.config.config()
    }
}
