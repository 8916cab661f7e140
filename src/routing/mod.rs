//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path, query)
//!     → pipeline.rs (request logging → security headers)
//!     → router.rs (exact path lookup, then /static/ prefix, else 404)
//!     → handler (method check, repository call, render)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No path templates; exact paths plus one prefix
//! - Deterministic: same input always matches same route
//! - Middleware order is an explicit list, not nested closures

pub mod pipeline;
pub mod router;

pub use pipeline::{default_pipeline, Pipeline, Wrapper};
pub use router::{route_table, STATIC_PREFIX};
