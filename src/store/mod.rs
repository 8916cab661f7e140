//! Snippet storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler (validated input)
//!     → traits.rs (SnippetRepository seam)
//!     → sqlite.rs (parameterized statements against the pool)
//!     → types.rs (decoded Snippet rows)
//!     → error.rs (NotFound vs. Store fault)
//! ```
//!
//! # Design Decisions
//! - Liveness (`expires > now`) is a query-time filter; rows are never
//!   updated or deleted
//! - All timestamps come from the store clock, never the caller
//! - The repository never logs; callers decide what a fault means

pub mod error;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::{RepoError, RepoResult};
pub use sqlite::SqliteSnippetRepository;
pub use traits::SnippetRepository;
pub use types::{ExpiresDays, Snippet, SnippetId};
