//! # Blog Server
//!
//! A blog backend with posts, reactions, search, and JWT authentication.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading (fails fast on malformed values)
//! - Database connection pool
//! - HTTP server

use anyhow::Result;
use tracing::info;

use blog_server::config::Settings;
use blog_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    blog_server::telemetry::init_tracing();

    info!("Starting Blog Server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
