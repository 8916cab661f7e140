//! Dependency bundle handed to every handler.

use std::sync::Arc;

use crate::render::{HtmlRenderer, Renderer};
use crate::store::SnippetRepository;

/// Application state injected into handlers.
///
/// Cloning is cheap; both collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub snippets: Arc<dyn SnippetRepository>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(snippets: Arc<dyn SnippetRepository>, renderer: Arc<dyn Renderer>) -> Self {
        Self { snippets, renderer }
    }

    /// State with the default HTML renderer.
    pub fn with_html(snippets: Arc<dyn SnippetRepository>) -> Self {
        Self::new(snippets, Arc::new(HtmlRenderer))
    }
}
