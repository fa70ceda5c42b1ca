//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayrollConfig;
use crate::engine::EngineOptions;

/// Shared application state.
///
/// Holds the loaded rate regimes and holiday calendar. Each request builds
/// its own engine for its payroll date from this configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<PayrollConfig>,
    options: EngineOptions,
}

impl AppState {
    /// Creates a new application state with default engine options.
    pub fn new(config: PayrollConfig) -> Self {
        Self::with_options(config, EngineOptions::default())
    }

    /// Creates a new application state with explicit engine options.
    pub fn with_options(config: PayrollConfig, options: EngineOptions) -> Self {
        Self {
            config: Arc::new(config),
            options,
        }
    }

    /// Returns a shared handle to the configuration.
    pub fn config(&self) -> Arc<PayrollConfig> {
        Arc::clone(&self.config)
    }

    /// Returns the engine options.
    pub fn options(&self) -> EngineOptions {
        self.options
    }
}
