//! CLI command implementations

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_logging, LogConfig};

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
    }
}

/// Build the server configuration from an optional file plus flag overrides
pub fn resolve_config(args: &ServeArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = &args.host {
        if host.is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = resolve_config(args)?;

    init_logging(LogConfig::new(args.log_level).json(args.json_logs))?;

    let server = HttpServer::with_config(config);
    tracing::info!(addr = %server.socket_addr(), "configured");

    run_server(server)
}

/// Run the server on a fresh tokio runtime
///
/// Bind and accept failures surface as I/O errors.
pub fn run_server(server: HttpServer) -> CliResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())?;
    Ok(())
}
