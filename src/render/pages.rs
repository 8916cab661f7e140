//! Page bodies for each view.

use axum::http::StatusCode;
use maud::{html, Markup};

use super::layout::{base, human_date};
use crate::store::Snippet;

pub fn home(snippets: &[Snippet]) -> Markup {
    base(
        "Home",
        html! {
            h2 { "Latest Snippets" }
            (snippet_table(snippets))
        },
    )
}

pub fn list(snippets: &[Snippet]) -> Markup {
    base(
        "All Snippets",
        html! {
            h2 { "All Snippets" }
            (snippet_table(snippets))
        },
    )
}

pub fn show(snippet: &Snippet) -> Markup {
    base(
        &format!("Snippet #{}", snippet.id),
        html! {
            div class="snippet" {
                div class="metadata" {
                    strong { (snippet.title) }
                    span { "#" (snippet.id) }
                }
                pre { code { (snippet.content) } }
                div class="metadata" {
                    time { "Created: " (human_date(&snippet.created)) }
                    time { "Expires: " (human_date(&snippet.expires)) }
                }
            }
        },
    )
}

pub fn error(status: StatusCode) -> Markup {
    let reason = status.canonical_reason().unwrap_or("Error");
    base(
        reason,
        html! {
            h2 { (status.as_u16()) " " (reason) }
            p { a href="/" { "Back to the home page" } }
        },
    )
}

fn snippet_table(snippets: &[Snippet]) -> Markup {
    html! {
        @if snippets.is_empty() {
            p { "There's nothing to see here yet!" }
        } @else {
            table {
                tr {
                    th { "Title" }
                    th { "Created" }
                    th { "ID" }
                }
                @for snippet in snippets {
                    tr {
                        td { a href={ "/snippet?id=" (snippet.id) } { (snippet.title) } }
                        td { (human_date(&snippet.created)) }
                        td { "#" (snippet.id) }
                    }
                }
            }
        }
    }
}
