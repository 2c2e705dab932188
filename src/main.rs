//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the Prometheus tools
//! over stdin/stdout.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use prometheus_mcp_server::core::{Config, McpServer, StdioTransport};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Prometheus API: {}", config.prometheus.api_url());

    serve(config).await?;

    info!("Server shutting down");

    Ok(())
}

/// Build the server and serve it over stdio until the session ends.
async fn serve(config: Config) -> prometheus_mcp_server::Result<()> {
    let server = McpServer::new(config)?;

    info!("Server initialized");

    StdioTransport::run(server).await?;

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP protocol.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
