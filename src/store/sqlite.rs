//! SQLite snippet repository using sqlx.
//!
//! # Connection Management
//!
//! Uses sqlx's `SqlitePool`, which is safe to share across concurrent
//! requests without extra locking. In-memory databases are pinned to a
//! single long-lived connection because every SQLite connection to
//! `:memory:` opens its own private database.
//!
//! # Store Clock
//!
//! `created`, `expires` and the liveness cutoff all come from SQLite's
//! `'now'`, which is fixed for the duration of one statement. Timestamps
//! are stored as `YYYY-MM-DD HH:MM:SS.SSS` UTC text so that lexical and
//! chronological order agree.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use crate::store::error::{RepoError, RepoResult};
use crate::store::traits::{SnippetRepository, LATEST_LIMIT};
use crate::store::types::{ExpiresDays, Snippet, SnippetId};

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    title   TEXT NOT NULL,
    content TEXT NOT NULL,
    created TEXT NOT NULL,
    expires TEXT NOT NULL
)
"#;

const CREATE_INDEX_SQL: &str =
    "CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets (created)";

const INSERT_SQL: &str = r#"
INSERT INTO snippets (title, content, created, expires)
VALUES (
    ?,
    ?,
    strftime('%Y-%m-%d %H:%M:%f', 'now'),
    strftime('%Y-%m-%d %H:%M:%f', 'now', ?)
)
"#;

const GET_SQL: &str = r#"
SELECT id, title, content, created, expires
FROM snippets
WHERE expires > strftime('%Y-%m-%d %H:%M:%f', 'now') AND id = ?
"#;

const GET_ALL_SQL: &str = r#"
SELECT id, title, content, created, expires
FROM snippets
WHERE expires > strftime('%Y-%m-%d %H:%M:%f', 'now')
"#;

const LATEST_SQL: &str = r#"
SELECT id, title, content, created, expires
FROM snippets
WHERE expires > strftime('%Y-%m-%d %H:%M:%f', 'now')
ORDER BY created DESC, id DESC
LIMIT ?
"#;

/// SQLite-backed [`SnippetRepository`].
#[derive(Debug, Clone)]
pub struct SqliteSnippetRepository {
    pool: SqlitePool,
}

impl SqliteSnippetRepository {
    /// Wrap an existing pool. The schema must already exist.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url` and make sure the `snippets` table exists.
    ///
    /// Accepts `sqlite::memory:` for an in-memory database or any
    /// `sqlite://path?mode=rwc` style URL.
    ///
    /// # Errors
    ///
    /// Returns `RepoError::Store` if the URL is invalid, the connection
    /// fails, or the schema bootstrap fails.
    pub async fn connect(url: &str, max_connections: u32) -> RepoResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = url.contains(":memory:");
        let pool = if in_memory {
            SqlitePoolOptions::new()
                .min_connections(1)
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(max_connections.max(1))
                .acquire_timeout(Duration::from_secs(30))
                .connect_with(options)
                .await?
        };

        let repo = Self::new(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Create the `snippets` table and its index if they are missing.
    pub async fn ensure_schema(&self) -> RepoResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        sqlx::query(CREATE_INDEX_SQL).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SnippetRepository for SqliteSnippetRepository {
    async fn insert(
        &self,
        title: &str,
        content: &str,
        expires: ExpiresDays,
    ) -> RepoResult<SnippetId> {
        let result = sqlx::query(INSERT_SQL)
            .bind(title)
            .bind(content)
            .bind(expires.as_modifier())
            .execute(&self.pool)
            .await?;

        let raw = result.last_insert_rowid();
        SnippetId::new(raw)
            .ok_or_else(|| RepoError::Store(decode_error(format!("store assigned invalid id {raw}"))))
    }

    async fn get(&self, id: SnippetId) -> RepoResult<Snippet> {
        let row = sqlx::query(GET_SQL)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(snippet_from_row(&row)?),
            None => Err(RepoError::NotFound),
        }
    }

    async fn get_all(&self) -> RepoResult<Vec<Snippet>> {
        let rows = sqlx::query(GET_ALL_SQL).fetch_all(&self.pool).await?;
        decode_rows(&rows)
    }

    async fn latest(&self) -> RepoResult<Vec<Snippet>> {
        let rows = sqlx::query(LATEST_SQL)
            .bind(i64::from(LATEST_LIMIT))
            .fetch_all(&self.pool)
            .await?;
        decode_rows(&rows)
    }
}

/// Decode a result set. An empty set is success; any bad row is a store
/// fault, never `NotFound`.
fn decode_rows(rows: &[SqliteRow]) -> RepoResult<Vec<Snippet>> {
    rows.iter()
        .map(|row| snippet_from_row(row).map_err(RepoError::from))
        .collect()
}

fn snippet_from_row(row: &SqliteRow) -> Result<Snippet, sqlx::Error> {
    let raw_id: i64 = row.try_get("id")?;
    let id = SnippetId::new(raw_id)
        .ok_or_else(|| decode_error(format!("invalid snippet id {raw_id}")))?;

    Ok(Snippet {
        id,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        created: store_timestamp(row, "created")?,
        expires: store_timestamp(row, "expires")?,
    })
}

fn store_timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let naive: NaiveDateTime = row.try_get(column)?;
    Ok(naive.and_utc())
}

fn decode_error(message: String) -> sqlx::Error {
    sqlx::Error::Decode(message.into())
}
