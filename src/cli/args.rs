//! CLI argument definitions using clap
//!
//! Commands:
//! - item-registry serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::Severity;

/// Item Registry - an in-memory item store served over HTTP
#[derive(Parser, Debug)]
#[command(name = "item-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Port number for the HTTP server (overrides the config file)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Minimum log severity (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = Severity::Info)]
    pub log_level: Severity,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
