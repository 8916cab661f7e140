//! Route table and handler behavior through the assembled app.

use std::sync::Arc;

use axum::http::{header, Method, StatusCode};
use chrono::Duration;
use snippetbox::security::SECURITY_HEADERS;
use snippetbox::store::{ExpiresDays, SnippetRepository};
use tower::ServiceExt;

mod common;

use common::{body_text, get, post_form, request, FailingRepository};

const HAIKU_FORM: &str =
    "title=O+snail&content=O+snail%0AClimb+Mount+Fuji%2C%0ABut+slowly%2C+slowly%21&expires=7";

#[tokio::test]
async fn home_without_snippets_is_ok() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let res = app.oneshot(get("/")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(body_text(res).await.contains("There's nothing to see here yet!"));
}

#[tokio::test]
async fn home_lists_latest_snippets() {
    let repo = Arc::new(common::memory_repo().await);
    repo.insert("First", "one", ExpiresDays::new(1)).await.unwrap();
    repo.insert("Second", "two", ExpiresDays::new(1)).await.unwrap();
    let (app, _assets) = common::app_with(repo);

    let body = body_text(app.oneshot(get("/")).await.unwrap()).await;

    let first = body.find("First").unwrap();
    let second = body.find("Second").unwrap();
    assert!(second < first, "newest snippet should be listed first");
}

#[tokio::test]
async fn show_snippet_renders_live_snippet() {
    let repo = Arc::new(common::memory_repo().await);
    let id = repo.insert("O snail", "Climb Mount Fuji", ExpiresDays::new(7)).await.unwrap();
    let (app, _assets) = common::app_with(repo);

    let res = app.oneshot(get(&format!("/snippet?id={id}"))).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("O snail"));
    assert!(body.contains("Climb Mount Fuji"));
}

#[tokio::test]
async fn malformed_absent_and_expired_ids_are_all_404() {
    let repo = Arc::new(common::memory_repo().await);
    let expired = common::insert_raw(&repo, "old", "-2 days", "-1 days").await;
    let (app, _assets) = common::app_with(repo);

    let uris = [
        "/snippet".to_string(),
        "/snippet?id=".to_string(),
        "/snippet?id=abc".to_string(),
        "/snippet?id=0".to_string(),
        "/snippet?id=-1".to_string(),
        "/snippet?id=999".to_string(),
        format!("/snippet?id={expired}"),
    ];
    for uri in uris {
        let res = app.clone().oneshot(get(&uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn repeated_id_uses_the_first_value() {
    let repo = Arc::new(common::memory_repo().await);
    let id = repo.insert("first", "one", ExpiresDays::new(1)).await.unwrap();
    let (app, _assets) = common::app_with(repo);

    let res = app
        .clone()
        .oneshot(get(&format!("/snippet?id={id}&id=999")))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.oneshot(get(&format!("/snippet?id=999&id={id}"))).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn longest_expiry_is_stored() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let res = app
        .oneshot(post_form("/snippet/create", "title=a&content=b&expires=365000"))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn show_snippets_with_no_live_rows_is_ok() {
    let repo = Arc::new(common::memory_repo().await);
    common::insert_raw(&repo, "old", "-2 days", "-1 days").await;
    let (app, _assets) = common::app_with(repo);

    let res = app.oneshot(get("/snippets")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn show_snippets_rejects_post_with_allow_get() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let res = app.oneshot(request(Method::POST, "/snippets")).await.unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[header::ALLOW], "GET");
}

#[tokio::test]
async fn head_is_served_on_pages_but_not_on_snippets() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let home = app.clone().oneshot(request(Method::HEAD, "/")).await.unwrap();
    assert_eq!(home.status(), StatusCode::OK);

    let list = app.oneshot(request(Method::HEAD, "/snippets")).await.unwrap();
    assert_eq!(list.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(list.headers()[header::ALLOW], "GET");
}

#[tokio::test]
async fn create_rejects_get_with_allow_post() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let res = app.oneshot(get("/snippet/create")).await.unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[header::ALLOW], "POST");
}

#[tokio::test]
async fn create_redirects_to_new_snippet() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let res = app
        .clone()
        .oneshot(post_form("/snippet/create", HAIKU_FORM))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers()[header::LOCATION], "/snippet?id=1");

    let shown = app.oneshot(get("/snippet?id=1")).await.unwrap();
    assert_eq!(shown.status(), StatusCode::OK);
    assert!(body_text(shown).await.contains("But slowly, slowly!"));
}

#[tokio::test]
async fn create_with_bad_form_is_400() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let forms = [
        "title=a&content=b",
        "title=a&content=b&expires=-3",
        "title=a&content=b&expires=week",
        "title=a&content=b&expires=4294967295",
        "title=a&content=b&expires=365001",
    ];
    for form in forms {
        let res = app
            .clone()
            .oneshot(post_form("/snippet/create", form))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{form}");
    }
}

#[tokio::test]
async fn insert_then_create_end_to_end() {
    let repo = Arc::new(common::memory_repo().await);
    let first = repo
        .insert("O snail", "...haiku...", "7".parse().unwrap())
        .await
        .unwrap();
    let stored = repo.get(first).await.unwrap();
    assert_eq!(stored.expires - stored.created, Duration::days(7));

    let (app, _assets) = common::app_with(repo);
    let res = app
        .oneshot(post_form("/snippet/create", HAIKU_FORM))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()[header::LOCATION],
        format!("/snippet?id={}", first.get() + 1).as_str()
    );
}

#[tokio::test]
async fn static_prefix_is_stripped_before_serving() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let res = app.clone().oneshot(get("/static/css/main.css")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, "body{margin:0}");

    let missing = app.oneshot(get("/static/css/missing.css")).await.unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unmatched_paths_are_404() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    for uri in ["/nope", "/snippet/", "/snippets/1", "/css/main.css"] {
        let res = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn store_faults_are_generic_500s() {
    let (app, _assets) = common::app_with(Arc::new(FailingRepository));

    let requests = [
        get("/"),
        get("/snippet?id=1"),
        get("/snippets"),
        post_form("/snippet/create", HAIKU_FORM),
    ];
    for req in requests {
        let uri = req.uri().to_string();
        let res = app.clone().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let body = body_text(res).await;
        assert!(!body.contains("10.0.0.7"), "fault detail leaked on {uri}");
    }
}

#[tokio::test]
async fn malformed_id_skips_the_store() {
    let (app, _assets) = common::app_with(Arc::new(FailingRepository));

    let res = app.oneshot(get("/snippet?id=abc")).await.unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn method_check_runs_before_the_store() {
    let (app, _assets) = common::app_with(Arc::new(FailingRepository));

    let res = app.oneshot(request(Method::DELETE, "/snippets")).await.unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn security_headers_on_every_outcome() {
    let (app, _assets) = common::app_with(Arc::new(common::memory_repo().await));

    let requests = [
        get("/"),
        get("/missing"),
        request(Method::POST, "/snippets"),
        get("/snippet?id=5"),
        get("/static/css/main.css"),
    ];
    for req in requests {
        let uri = req.uri().to_string();
        let res = app.clone().oneshot(req).await.unwrap();
        for (name, value) in SECURITY_HEADERS.iter() {
            assert_eq!(res.headers()[name], *value, "{name} missing on {uri}");
        }
    }
}
