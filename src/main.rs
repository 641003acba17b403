//! # Applicant Service
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Applicant store (PostgreSQL or in-memory)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use applicant_service::config::Settings;
use applicant_service::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    applicant_service::telemetry::init_tracing();

    info!("Starting Applicant Service...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
