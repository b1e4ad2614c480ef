//! rapport MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes semantic search over the
//! hosted relationship-prompt corpus as tools for MCP clients.

use rapport::core::config::Config;
use rapport::core::services::Services;
use rapport::mcp::McpServer;
use std::sync::Arc;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr) // Critical: stderr not stdout
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false) // No color codes
        .compact() // Concise format
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });

    config.log_config();

    // Create services (builds the remote search client)
    let services = match Services::new(config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            eprintln!("Failed to initialize services: {e}");
            std::process::exit(1);
        }
    };

    // Create and run MCP server
    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
