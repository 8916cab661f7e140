//! Request handlers.
//!
//! Every route accepts any method at the routing layer; each handler checks
//! the one method it serves and answers 405 with an `Allow` header
//! otherwise. The two page routes `/` and `/snippet` also answer HEAD;
//! `/snippets` is strictly GET.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::Method,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::store::{ExpiresDays, SnippetId};

type HandlerResult = Result<Response, AppError>;

/// `GET /` - latest snippets.
pub async fn home(State(state): State<AppState>, method: Method) -> Response {
    respond(&state, home_page(&state, &method).await)
}

/// `GET /snippet?id=N` - one live snippet.
pub async fn show_snippet(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Response {
    respond(&state, snippet_page(&state, &method, query.as_deref()).await)
}

/// `GET /snippets` - every live snippet.
pub async fn show_snippets(State(state): State<AppState>, method: Method) -> Response {
    respond(&state, snippets_page(&state, &method).await)
}

/// `POST /snippet/create` - insert from a urlencoded form, then redirect.
pub async fn create_snippet(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    respond(&state, create(&state, &method, &body).await)
}

/// Fallback for unmatched paths.
pub async fn not_found(State(state): State<AppState>) -> Response {
    respond(&state, Err(AppError::NotFound))
}

fn respond(state: &AppState, result: HandlerResult) -> Response {
    result.unwrap_or_else(|err| err.into_response_with(state.renderer.as_ref()))
}

fn require_method(actual: &Method, expected: Method) -> Result<(), AppError> {
    if *actual == expected {
        Ok(())
    } else {
        Err(AppError::MethodNotAllowed { allow: expected })
    }
}

/// GET, or HEAD treated as GET.
fn require_get(actual: &Method) -> Result<(), AppError> {
    if *actual == Method::HEAD {
        return Ok(());
    }
    require_method(actual, Method::GET)
}

async fn home_page(state: &AppState, method: &Method) -> HandlerResult {
    require_get(method)?;
    let snippets = state.snippets.latest().await?;
    Ok(state.renderer.home(&snippets).into_response())
}

async fn snippet_page(state: &AppState, method: &Method, query: Option<&str>) -> HandlerResult {
    require_get(method)?;
    // Malformed ids are indistinguishable from missing ones.
    let id = parse_id_query(query).ok_or(AppError::NotFound)?;
    let snippet = state.snippets.get(id).await?;
    Ok(state.renderer.show(&snippet).into_response())
}

async fn snippets_page(state: &AppState, method: &Method) -> HandlerResult {
    require_method(method, Method::GET)?;
    let snippets = state.snippets.get_all().await?;
    Ok(state.renderer.list(&snippets).into_response())
}

async fn create(state: &AppState, method: &Method, body: &[u8]) -> HandlerResult {
    require_method(method, Method::POST)?;
    let form = CreateSnippetForm::parse(body)?;

    let id = state
        .snippets
        .insert(&form.title, &form.content, form.expires)
        .await?;

    tracing::info!(snippet_id = %id, expires_days = form.expires.days(), "snippet created");
    Ok(Redirect::to(&format!("/snippet?id={id}")).into_response())
}

/// Extract a valid id (integer >= 1) from a raw query string. When `id`
/// repeats, the first occurrence wins.
fn parse_id_query(query: Option<&str>) -> Option<SnippetId> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query.unwrap_or_default()).ok()?;
    let (_, raw) = pairs.into_iter().find(|(key, _)| key == "id")?;
    raw.parse().ok()
}

#[derive(Debug, Deserialize)]
struct RawCreateForm {
    title: String,
    content: String,
    expires: String,
}

/// Validated create-snippet form.
#[derive(Debug, PartialEq, Eq)]
pub struct CreateSnippetForm {
    pub title: String,
    pub content: String,
    pub expires: ExpiresDays,
}

impl CreateSnippetForm {
    /// Parse `title`, `content` and `expires` from a urlencoded body.
    ///
    /// `expires` must be a non-negative whole number of days.
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        let raw: RawCreateForm = serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        let expires = raw
            .expires
            .parse::<ExpiresDays>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(Self {
            title: raw.title,
            content: raw.content,
            expires,
        })
    }
}
