//! HTTP server initialization and runtime setup.
//!
//! Opens the database, initializes the schema, wires the services and runs
//! the Axum server until a shutdown signal arrives.

use crate::api::middleware::cors;
use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::{SqliteUrlRepository, connect, init_schema};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Schema (create-if-absent)
/// - Link service with a random code generator
/// - Axum HTTP server with graceful shutdown
///
/// The pool is closed once the server has drained.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or schema initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Connected to database");

    init_schema(&pool).await?;

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let generator = Arc::new(RandomCodeGenerator::new(config.short_code_length));
    let link_service = Arc::new(LinkService::new(repository, generator));

    let state = AppState::new(link_service, config.base_url.clone());

    let app = app_router(state, cors::layer(&config.cors_allowed_origins));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves when Ctrl-C (or SIGTERM on unix) is received.
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
