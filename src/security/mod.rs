//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Every response:
//!     → headers.rs (CSP, Referrer-Policy, nosniff, frame and XSS headers)
//! ```

pub mod headers;

pub use headers::{secure_headers, SECURITY_HEADERS};
