//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     → logging.rs (install subscriber from ObservabilityConfig)
//!
//! Per request:
//!     → logging.rs::log_request (one structured event, request ID)
//!     → handlers log store faults at error level
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID assigned at the outermost layer
//! - The repository never logs

pub mod logging;

pub use logging::{init_logging, log_request, X_REQUEST_ID};
