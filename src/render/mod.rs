//! HTML rendering.
//!
//! Handlers hand plain data (one snippet, a slice of snippets, or a status)
//! to a [`Renderer`] and never see how it becomes markup. The shipped
//! [`HtmlRenderer`] uses [maud](https://maud.lambda.xyz/), so every dynamic
//! value is escaped.

pub mod layout;
pub mod pages;

use axum::http::StatusCode;
use maud::Markup;

use crate::store::Snippet;

/// Turns snippet data into response markup.
pub trait Renderer: Send + Sync {
    /// Landing page with the latest snippets.
    fn home(&self, snippets: &[Snippet]) -> Markup;

    /// Detail page for one snippet.
    fn show(&self, snippet: &Snippet) -> Markup;

    /// Every live snippet.
    fn list(&self, snippets: &[Snippet]) -> Markup;

    /// Generic page for an error status. Must not include fault details.
    fn error(&self, status: StatusCode) -> Markup;
}

/// Default renderer producing full HTML pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn home(&self, snippets: &[Snippet]) -> Markup {
        pages::home(snippets)
    }

    fn show(&self, snippet: &Snippet) -> Markup {
        pages::show(snippet)
    }

    fn list(&self, snippets: &[Snippet]) -> Markup {
        pages::list(snippets)
    }

    fn error(&self, status: StatusCode) -> Markup {
        pages::error(status)
    }
}
