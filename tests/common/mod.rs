//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use snippetbox::store::{
    ExpiresDays, RepoError, RepoResult, Snippet, SnippetId, SnippetRepository,
    SqliteSnippetRepository,
};
use snippetbox::{build_app, AppState};
use tempfile::TempDir;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Fresh in-memory store with the schema in place.
pub async fn memory_repo() -> SqliteSnippetRepository {
    SqliteSnippetRepository::connect("sqlite::memory:", 1)
        .await
        .expect("in-memory store")
}

/// Insert a row with explicit store-relative offsets, bypassing `insert`.
///
/// Offsets are SQLite modifiers such as `-3 days` or `+10 minutes`.
pub async fn insert_raw(
    repo: &SqliteSnippetRepository,
    title: &str,
    created_offset: &str,
    expires_offset: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO snippets (title, content, created, expires) VALUES (?, 'raw', \
         strftime('%Y-%m-%d %H:%M:%f', 'now', ?), strftime('%Y-%m-%d %H:%M:%f', 'now', ?))",
    )
    .bind(title)
    .bind(created_offset)
    .bind(expires_offset)
    .execute(repo.pool())
    .await
    .expect("raw insert")
    .last_insert_rowid()
}

/// Repository whose every call fails with a store fault.
pub struct FailingRepository;

fn fault() -> RepoError {
    RepoError::Store(sqlx::Error::Protocol("connection reset by peer at 10.0.0.7".into()))
}

#[async_trait]
impl SnippetRepository for FailingRepository {
    async fn insert(&self, _: &str, _: &str, _: ExpiresDays) -> RepoResult<SnippetId> {
        Err(fault())
    }

    async fn get(&self, _: SnippetId) -> RepoResult<Snippet> {
        Err(fault())
    }

    async fn get_all(&self) -> RepoResult<Vec<Snippet>> {
        Err(fault())
    }

    async fn latest(&self) -> RepoResult<Vec<Snippet>> {
        Err(fault())
    }
}

/// Static asset directory containing `css/main.css`.
pub fn static_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css/main.css"), "body{margin:0}").unwrap();
    dir
}

/// Fully assembled app over `repo`. Keep the `TempDir` alive for the test.
pub fn app_with(repo: Arc<dyn SnippetRepository>) -> (Router, TempDir) {
    let assets = static_dir();
    let app = build_app(AppState::with_html(repo), assets.path());
    (app, assets)
}

pub fn get(uri: &str) -> Request<Body> {
    request(Method::GET, uri)
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Tracing layer counting events emitted by the request logger.
#[derive(Clone, Default)]
pub struct RequestLogCounter(Arc<AtomicUsize>);

impl RequestLogCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for RequestLogCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() == "snippetbox::observability::logging" {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
