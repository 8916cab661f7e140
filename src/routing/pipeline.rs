//! Middleware pipeline.
//!
//! # Responsibilities
//! - Hold cross-cutting wrappers as an explicit ordered list
//! - Apply them to the routing table with a single fold
//!
//! # Design Decisions
//! - The first registered wrapper is the outermost and runs first
//! - Every wrapper is a plain `Router -> Router` function, so each one can
//!   be tested against a fake inner router
//! - Wrappers are applied with `Router::layer`, which also covers the
//!   fallback, so 404 and 405 responses pass through every wrapper

use std::fmt;

use axum::{middleware, Router};

use crate::observability::log_request;
use crate::security::headers::secure_headers;

/// A cross-cutting wrapper around the routing table.
pub type Wrapper = Box<dyn Fn(Router) -> Router + Send + Sync>;

/// Ordered list of wrappers, outermost first.
#[derive(Default)]
pub struct Pipeline {
    wrappers: Vec<(&'static str, Wrapper)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a wrapper inside all previously registered ones.
    pub fn wrap<F>(mut self, name: &'static str, wrapper: F) -> Self
    where
        F: Fn(Router) -> Router + Send + Sync + 'static,
    {
        self.wrappers.push((name, Box::new(wrapper)));
        self
    }

    /// Wrapper names from outermost to innermost.
    pub fn names(&self) -> Vec<&'static str> {
        self.wrappers.iter().map(|(name, _)| *name).collect()
    }

    /// Wrap `inner` with every registered wrapper.
    ///
    /// Folds innermost first, so the first registered wrapper ends up as
    /// the outermost layer.
    pub fn apply(&self, inner: Router) -> Router {
        self.wrappers
            .iter()
            .rev()
            .fold(inner, |router, (_, wrapper)| wrapper(router))
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("wrappers", &self.names())
            .finish()
    }
}

/// Request logging wrapper.
pub fn request_logging(router: Router) -> Router {
    router.layer(middleware::from_fn(log_request))
}

/// Standard pipeline: `request_logging(secure_headers(routes))`.
pub fn default_pipeline() -> Pipeline {
    Pipeline::new()
        .wrap("request_logging", request_logging)
        .wrap("secure_headers", secure_headers)
}
