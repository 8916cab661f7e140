//! Security response headers.
//!
//! # Responsibilities
//! - Attach baseline security headers to every response, including 404/405
//!
//! # Design Decisions
//! - Headers are defaults: a handler that sets one of them explicitly keeps
//!   its own value
//! - Built from tower-http `SetResponseHeaderLayer`s applied as one wrapper

use axum::{
    http::{header, HeaderName, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// The baseline headers, in the order they are attached.
pub const SECURITY_HEADERS: [(HeaderName, &str); 5] = [
    (
        header::CONTENT_SECURITY_POLICY,
        "default-src 'self'; style-src 'self' fonts.googleapis.com; font-src fonts.gstatic.com",
    ),
    (header::REFERRER_POLICY, "origin-when-cross-origin"),
    (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
    (header::X_FRAME_OPTIONS, "deny"),
    (header::X_XSS_PROTECTION, "0"),
];

/// Wrap `router` so every response carries [`SECURITY_HEADERS`].
pub fn secure_headers(router: Router) -> Router {
    SECURITY_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(
                name,
                HeaderValue::from_static(value),
            ))
        })
}
