/// Server setup and initialization
///
/// Wires together the database, the project repository and the HTTP routes.
/// Provides the application factory used by both the binary and the tests.

use crate::{
    api::{create_project_routes, AppState},
    config::Config,
    project::{database, ProjectRepository},
};
use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;

/// Create the main Axum application from configuration
///
/// Opens the database (initializing the schema) and builds the router.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("🏗️ Initializing project database at {}", config.database.path.display());
    let pool = database::connect(&config.database.path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open project database: {}", e))?;

    let app = build_router(ProjectRepository::new(pool));

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Build the HTTP router around an existing repository
pub fn build_router(repository: ProjectRepository) -> Router {
    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Project record API routes
        .merge(create_project_routes())
        .with_state(AppState { repository })
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting Project Tracker server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
