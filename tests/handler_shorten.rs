mod common;

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use shorturl::api;
use shorturl::domain::repositories::ShortLinkRepository;
use shorturl::infrastructure::persistence::InMemoryShortLinkRepository;
use std::sync::Arc;

fn server() -> (TestServer, Arc<InMemoryShortLinkRepository>) {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state);

    (TestServer::new(app).unwrap(), repository)
}

#[tokio::test]
async fn test_shorten_first_url_gets_code_one() {
    let (server, _repo) = server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.example.com/page")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "original_url": "https://www.example.com/page",
        "short_url": 1
    }));
}

#[tokio::test]
async fn test_shorten_same_url_twice_is_idempotent() {
    let (server, repo) = server();

    let first = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.example.com/page")])
        .await
        .json::<Value>();
    let second = server
        .post("/api/shorturl")
        .form(&[("url", "https://www.example.com/page")])
        .await
        .json::<Value>();

    assert_eq!(first, second);
    assert_eq!(second["short_url"], 1);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_distinct_urls_are_sequential() {
    let (server, _repo) = server();

    let urls = [
        "https://example.com",
        "https://example.com/",
        "https://rust-lang.org/learn",
        "HTTP://www.example.com",
    ];

    for (i, url) in urls.iter().enumerate() {
        let json = server
            .post("/api/shorturl")
            .form(&[("url", *url)])
            .await
            .json::<Value>();

        assert_eq!(json["original_url"], *url);
        assert_eq!(json["short_url"], i as i64 + 1);
    }
}

#[tokio::test]
async fn test_shorten_unresolvable_host() {
    let (server, repo) = server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://not-a-real-host.invalid")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid URL" }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_empty_url() {
    let (server, repo) = server();

    let response = server.post("/api/shorturl").form(&[("url", "")]).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid URL" }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_missing_field() {
    let (server, _repo) = server();

    let response = server
        .post("/api/shorturl")
        .form(&[("other", "value")])
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": "invalid URL" }));
}

#[tokio::test]
async fn test_shorten_host_with_port_is_invalid() {
    let (server, _repo) = server();

    let response = server
        .post("/api/shorturl")
        .form(&[("url", "https://example.com:8080/page")])
        .await;

    response.assert_json(&json!({ "error": "invalid URL" }));
}

#[tokio::test]
async fn test_shorten_stores_url_unmodified() {
    let (server, repo) = server();
    let url = "https://www.example.com/Path?q=A%20B#frag";

    server.post("/api/shorturl").form(&[("url", url)]).await;

    let stored = repo.find_by_short_url(1).await.unwrap().unwrap();
    assert_eq!(stored.original_url, url);
}
