//! Repository error types.

use thiserror::Error;

/// Outcome of a repository call that did not produce a value.
#[derive(Debug, Error)]
pub enum RepoError {
    /// No live row matched a single-record lookup.
    ///
    /// Covers ids that never existed and ids whose snippet has expired.
    #[error("no matching record found")]
    NotFound,

    /// Any other backing-store fault (connectivity, statement, decoding).
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl RepoError {
    /// Returns true if this is the domain-level "no live row" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

pub type RepoResult<T> = Result<T, RepoError>;
