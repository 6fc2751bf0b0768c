//! Structured logging setup
//!
//! Installs a global `tracing` subscriber:
//! - Human-readable or JSON lines
//! - `RUST_LOG` overrides the configured severity
//! - One log line = one event

use std::fmt;

use clap::ValueEnum;
use thiserror::Error;
use tracing_subscriber::{
    fmt as fmt_layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Minimum severity to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum Severity {
    /// Span and per-request internals
    Trace,
    /// Store operations
    Debug,
    /// Normal operations
    #[default]
    Info,
    /// Rejected requests
    Warn,
    /// Failed requests
    Error,
}

impl Severity {
    /// Returns the filter directive for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub severity: Severity,
    pub json: bool,
}

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to initialize logging: {0}")]
    InitializationFailed(String),
}

impl LogConfig {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            json: false,
        }
    }

    pub fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Filter from `RUST_LOG`, falling back to the configured severity
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.severity.as_str()))
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: LogConfig) -> Result<(), LoggingError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let layer = fmt_layer::layer().with_target(true);

    let result = if config.json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };

    result.map_err(|e| LoggingError::InitializationFailed(e.to_string()))
}
