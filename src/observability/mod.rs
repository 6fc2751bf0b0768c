//! Observability for the item registry
//!
//! Structured logging via `tracing`. Request/response logging is attached
//! to the router by `http_server`.

mod logger;

pub use logger::{init_logging, LogConfig, LoggingError, Severity};
