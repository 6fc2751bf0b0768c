//! CLI module for the item registry
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{resolve_config, run, run_command, run_server, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
