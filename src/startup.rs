//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;

use crate::application::services::{ApplicantService, ApplicantServiceImpl};
use crate::config::Settings;
use crate::domain::ApplicantRepository;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{InMemoryApplicantRepository, PgApplicantRepository};
use crate::presentation::http::{handlers, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub applicants: Arc<dyn ApplicantService>,
    pub store: Arc<dyn ApplicantRepository>,
}

impl AppState {
    /// Wire the applicant service over the given store.
    pub fn new(store: Arc<dyn ApplicantRepository>) -> Self {
        let applicants = Arc::new(ApplicantServiceImpl::new(store.clone()));
        Self { applicants, store }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        handlers::health::init_server_start();

        let store = create_store(&settings).await?;
        let router = build_router(AppState::new(store), &settings);

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped (Ctrl-C or SIGTERM)
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        tracing::info!("Server stopped");
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

/// Router with the trace and CORS layers applied
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors)),
    )
}

/// PostgreSQL when a database URL is configured, otherwise process memory
async fn create_store(settings: &Settings) -> Result<Arc<dyn ApplicantRepository>> {
    let Some(url) = settings.database.url.as_deref() else {
        tracing::warn!("No database URL configured, applicants are kept in memory");
        return Ok(Arc::new(InMemoryApplicantRepository::new()));
    };

    let pool = database::create_pool(url, &settings.database).await?;
    tracing::info!("Database connection pool created");

    if settings.database.run_migrations {
        database::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(PgApplicantRepository::new(pool)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
