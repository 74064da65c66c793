/// Project Tracker server entry point
///
/// Loads configuration from the environment and starts the HTTP server.

use project_tracker::{config::Config, server::start_server};

/// Application entry point
///
/// The server provides:
/// - Project record API at /api/projects/*
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults to 0.0.0.0:3004 and ./projects.db)
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
