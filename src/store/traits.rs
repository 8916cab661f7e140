//! Repository trait definitions.
//!
//! Handlers only see this trait; the SQLite pool stays behind it.

use async_trait::async_trait;

use crate::store::error::RepoResult;
use crate::store::types::{ExpiresDays, Snippet, SnippetId};

/// Number of rows returned by [`SnippetRepository::latest`].
pub const LATEST_LIMIT: u32 = 10;

/// Snippet persistence contract.
///
/// Snippets are append-only. Reads only ever return live rows
/// (`expires` strictly after the store clock at query time).
#[async_trait]
pub trait SnippetRepository: Send + Sync {
    /// Insert a snippet and return the store-assigned id.
    ///
    /// `created` is the store's current UTC time and `expires` is
    /// `created + expires` days.
    ///
    /// # Errors
    /// * `RepoError::Store` - any store fault
    async fn insert(&self, title: &str, content: &str, expires: ExpiresDays)
        -> RepoResult<SnippetId>;

    /// Fetch one live snippet.
    ///
    /// # Errors
    /// * `RepoError::NotFound` - no live row with this id
    /// * `RepoError::Store` - any other store fault
    async fn get(&self, id: SnippetId) -> RepoResult<Snippet>;

    /// Fetch every live snippet, in no particular order.
    ///
    /// Zero live rows is `Ok(vec![])`.
    async fn get_all(&self) -> RepoResult<Vec<Snippet>>;

    /// Fetch up to [`LATEST_LIMIT`] live snippets, newest first.
    ///
    /// Zero live rows is `Ok(vec![])`.
    async fn latest(&self) -> RepoResult<Vec<Snippet>>;
}
