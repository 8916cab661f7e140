//! Handler outcomes that are not a successful page.

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::render::Renderer;
use crate::store::RepoError;

/// Error surfaced by a handler.
#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown path, malformed id, or no live snippet.
    #[error("not found")]
    NotFound,

    /// The handler serves exactly one method.
    #[error("method not allowed, expected {allow}")]
    MethodNotAllowed { allow: Method },

    /// Form data could not be understood.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Unexpected store fault.
    #[error("store fault: {0}")]
    Store(RepoError),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the client-facing response. Store faults are logged here and
    /// only a generic page is returned.
    pub fn into_response_with(self, renderer: &dyn Renderer) -> Response {
        let status = self.status();
        match self {
            Self::MethodNotAllowed { allow } => {
                let allow = HeaderValue::from_str(allow.as_str())
                    .unwrap_or_else(|_| HeaderValue::from_static("GET"));
                (status, [(header::ALLOW, allow)], renderer.error(status)).into_response()
            }
            Self::Store(err) => {
                tracing::error!(error = %err, "store fault");
                (status, renderer.error(status)).into_response()
            }
            Self::BadRequest(reason) => {
                tracing::debug!(reason = %reason, "rejected request");
                (status, renderer.error(status)).into_response()
            }
            Self::NotFound => (status, renderer.error(status)).into_response(),
        }
    }
}
