//! Startup orchestration.
//!
//! # Responsibilities
//! - Open the snippet store and bootstrap its schema
//! - Build the dependency bundle for handlers
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, so traffic only arrives once the store is ready

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::{AppState, HttpServer};
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::wait_for_termination;
use crate::store::{RepoError, SqliteSnippetRepository};

/// Error raised before the server starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to open snippet store: {0}")]
    Store(#[from] RepoError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Open the configured store and build handler state.
pub async fn build_state(config: &AppConfig) -> Result<AppState, StartupError> {
    let repo =
        SqliteSnippetRepository::connect(&config.database.url, config.database.max_connections)
            .await?;

    tracing::info!(
        database_url = %config.database.url,
        max_connections = config.database.max_connections,
        "Snippet store ready"
    );

    Ok(AppState::with_html(Arc::new(repo)))
}

/// Start the service and block until SIGINT/SIGTERM.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&config).await?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        static_dir = %config.assets.static_dir,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, state);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        wait_for_termination().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    Ok(())
}
