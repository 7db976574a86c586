//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use dchub_mcp_server::core::config::LoggingConfig;
use dchub_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first, so configuration loading can report what it found
    init_logging(&LoggingConfig::from_env().level);

    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = McpServer::new(config.clone())?;
    log_banner(&config, &server).await;

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Log what this process serves and where it forwards to.
async fn log_banner(config: &Config, server: &McpServer) {
    info!("  Transport:  {}", config.transport.description());
    info!(
        "  Backend:    {} (timeout {}s)",
        config.backend.base_url, config.backend.timeout_secs
    );
    info!(
        "  Serving:    {} tools, {} resources, {} prompts",
        server.tool_count(),
        server.resource_count().await,
        server.prompt_count().await
    );
    if config.transport.is_stdio() {
        info!("  API keys:   not available over STDIO, calls are anonymous");
    } else {
        info!("  API keys:   X-API-Key header or api_key query parameter, forwarded to backend");
    }
    if config.audit.enabled {
        info!(
            "  Audit log:  {} (source {:?})",
            config.audit.db_path.display(),
            config.audit.source
        );
    }
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the STDIO transport.
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
