//! Route table.
//!
//! # Responsibilities
//! - Map exact paths to handlers
//! - Delegate the `/static/` prefix to the asset service, prefix stripped
//! - Answer everything else with 404
//!
//! # Design Decisions
//! - Exact paths only; dynamic values (snippet id) come from the query string
//! - Routes accept any method; each handler enforces its own
//! - Immutable after construction

use std::path::Path;

use axum::{routing::any, Router};
use tower_http::services::ServeDir;

use crate::http::handlers;
use crate::http::state::AppState;

/// Prefix under which static assets are served.
pub const STATIC_PREFIX: &str = "/static";

/// Build the routing table over `state`, serving assets from `static_dir`.
pub fn route_table(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", any(handlers::home))
        .route("/snippet", any(handlers::show_snippet))
        .route("/snippets", any(handlers::show_snippets))
        .route("/snippet/create", any(handlers::create_snippet))
        .nest_service(STATIC_PREFIX, ServeDir::new(static_dir))
        .fallback(handlers::not_found)
        .with_state(state)
}
