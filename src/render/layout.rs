//! Shared page chrome: base layout, navigation and footer.
//!
//! Styles are served from `/static/css/main.css`; the content security
//! policy forbids inline `<style>` blocks.

use chrono::{DateTime, Datelike, Utc};
use maud::{html, Markup, DOCTYPE};

/// Wrap page content in the base layout.
pub fn base(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - Snippetbox" }
                link rel="stylesheet" href="/static/css/main.css";
                link rel="stylesheet" href="https://fonts.googleapis.com/css?family=Ubuntu+Mono:400,700";
            }
            body {
                header {
                    h1 { a href="/" { "Snippetbox" } }
                }
                nav {
                    a href="/" { "Home" }
                    a href="/snippets" { "All snippets" }
                }
                main { (content) }
                (footer(Utc::now()))
            }
        }
    }
}

/// Footer with the current year.
pub fn footer(now: DateTime<Utc>) -> Markup {
    html! {
        footer { "Powered by Rust in " (now.year()) }
    }
}

/// `02 Jan 2006 at 15:04` style timestamp.
pub fn human_date(t: &DateTime<Utc>) -> String {
    t.format("%d %b %Y at %H:%M").to_string()
}
