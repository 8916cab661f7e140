//! Snippetbox: a small service for sharing expiring text snippets.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;
pub mod security;
pub mod store;

pub use config::AppConfig;
pub use http::{build_app, AppState, HttpServer};
pub use lifecycle::Shutdown;
pub use store::{SnippetRepository, SqliteSnippetRepository};
