//! URL discovery engine tests

use crate::common::{listing_html, mount_listing, TestWire};
use newsprint::crawler::{discover, DiscoverTarget, Fetcher};
use std::collections::HashSet;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> Fetcher {
    Fetcher::new("newsprint-test/1.0").expect("client builds")
}

#[tokio::test]
async fn test_discover_dedupes_across_pages() {
    let server = MockServer::start().await;
    let source = TestWire::new(&server.uri());

    // Page 2 repeats one link from page 1, a common listing overlap.
    mount_listing(&server, "/alpha/page-1", &["/article/1", "/article/2"]).await;
    mount_listing(&server, "/alpha/page-2", &["/article/2", "/article/3"]).await;

    let urls = discover(
        &source,
        &fetcher(),
        DiscoverTarget::ArticleType("alpha"),
        2,
        2,
    )
    .await;

    let distinct: HashSet<&String> = urls.iter().collect();
    assert_eq!(urls.len(), distinct.len(), "no duplicates survive");

    let expected: HashSet<String> = (1..=3)
        .map(|i| format!("{}/article/{i}", server.uri()))
        .collect();
    assert_eq!(urls.into_iter().collect::<HashSet<_>>(), expected);
}

#[tokio::test]
async fn test_page_failure_does_not_abort_discovery() {
    let server = MockServer::start().await;
    let source = TestWire::new(&server.uri());

    mount_listing(&server, "/alpha/page-1", &["/article/1"]).await;
    Mock::given(method("GET"))
        .and(path("/alpha/page-2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_listing(&server, "/alpha/page-3", &["/article/3"]).await;

    let urls = discover(
        &source,
        &fetcher(),
        DiscoverTarget::ArticleType("alpha"),
        3,
        2,
    )
    .await;

    let got: HashSet<String> = urls.into_iter().collect();
    let expected: HashSet<String> = [1, 3]
        .iter()
        .map(|i| format!("{}/article/{i}", server.uri()))
        .collect();
    assert_eq!(got, expected);
}

#[tokio::test]
async fn test_empty_listing_page_yields_nothing() {
    let server = MockServer::start().await;
    let source = TestWire::new(&server.uri());

    Mock::given(method("GET"))
        .and(path("/alpha/page-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&[])))
        .mount(&server)
        .await;

    let urls = discover(
        &source,
        &fetcher(),
        DiscoverTarget::ArticleType("alpha"),
        1,
        1,
    )
    .await;

    assert!(urls.is_empty());
}

#[tokio::test]
async fn test_search_discovery_encodes_query() {
    let server = MockServer::start().await;
    let source = TestWire::new(&server.uri());

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "mock news"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&["/article/s1"])))
        .mount(&server)
        .await;

    let urls = discover(
        &source,
        &fetcher(),
        DiscoverTarget::Search("mock news"),
        1,
        1,
    )
    .await;

    assert_eq!(urls, vec![format!("{}/article/s1", server.uri())]);
}
