//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Assemble the route table and wrap it in the middleware pipeline
//! - Bind the router to a listener with remote-address info
//! - Stop accepting on the shutdown signal and drain in-flight requests

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::http::state::AppState;
use crate::routing::{default_pipeline, route_table};

/// Full application: `request_logging(secure_headers(route_table))`.
pub fn build_app(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    default_pipeline().apply(route_table(state, static_dir))
}

/// HTTP server for snippetbox.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and dependencies.
    pub fn new(config: &AppConfig, state: AppState) -> Self {
        let router = build_app(state, &config.assets.static_dir);
        Self { router }
    }

    /// Run the server until a shutdown signal is received.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
