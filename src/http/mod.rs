//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, connect info, graceful shutdown)
//!     → [routing pipeline: logging → security headers → route table]
//!     → handlers.rs (method check, input parsing, repository call)
//!     → render collaborator (markup) or error.rs (status + generic page)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use error::AppError;
pub use server::{build_app, HttpServer};
pub use state::AppState;
