//! HTTP retrieval against a local mock server.
//!
//! `HttpFetcher` is blocking, so each fetch runs on `spawn_blocking` while
//! the mock server runs on the async runtime.

mod common;

use std::io::Read;
use std::time::Duration;

use common::{stalled_body_server, ARTICLE_HTML, MINIMAL_HTML, NOT_FOUND_HTML};
use rs_readable::{fetch_article, Error, FetchError, Fetcher, HttpFetcher, Options};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Owned copy of a fetched page so the blocking response is dropped on the
/// blocking thread.
#[derive(Debug)]
struct Fetched {
    url: String,
    status: u16,
    content_type: Option<String>,
    body: String,
}

async fn fetch_blocking(url: String, options: Options) -> Result<Fetched, FetchError> {
    let joined = tokio::task::spawn_blocking(move || -> Result<Fetched, FetchError> {
        let fetcher = HttpFetcher::new(&options)?;
        let mut page = fetcher.fetch(&url)?;
        let mut body = String::new();
        page.body
            .read_to_string(&mut body)
            .map_err(|e| FetchError::InvalidUrl {
                url: url.clone(),
                reason: format!("body read failed: {e}"),
            })?;
        Ok(Fetched {
            url: page.url.to_string(),
            status: page.status.as_u16(),
            content_type: page.content_type.clone(),
            body,
        })
    })
    .await;

    match joined {
        Ok(result) => result,
        Err(err) => panic!("blocking task panicked: {err}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_returns_body_status_and_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/post"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MINIMAL_HTML, "text/html; charset=utf-8"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/post", server.uri());
    match fetch_blocking(url.clone(), Options::default()).await {
        Ok(page) => {
            assert_eq!(page.status, 200);
            assert_eq!(page.url, url);
            assert_eq!(page.content_type.as_deref(), Some("text/html; charset=utf-8"));
            assert_eq!(page.body, MINIMAL_HTML);
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(NOT_FOUND_HTML, "text/html"))
        .mount(&server)
        .await;

    match fetch_blocking(format!("{}/missing", server.uri()), Options::default()).await {
        Ok(page) => {
            assert_eq!(page.status, 404);
            assert!(page.body.contains("Not Found"));
        }
        Err(err) => panic!("404 should not be a fetch error, got {err:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "readable-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(MINIMAL_HTML, "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let options = Options {
        user_agent: "readable-test/1.0".to_string(),
        ..Options::default()
    };
    let result = fetch_blocking(format!("{}/ua", server.uri()), options).await;
    assert!(result.is_ok(), "got {result:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(MINIMAL_HTML, "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let options = Options {
        timeout: Duration::from_millis(300),
        ..Options::default()
    };
    match fetch_blocking(format!("{}/slow", server.uri()), options).await {
        Err(FetchError::Timeout(limit)) => assert_eq!(limit, Duration::from_millis(300)),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn body_stalled_after_headers_times_out() {
    let url = stalled_body_server(Duration::from_secs(3));
    let options = Options {
        timeout: Duration::from_millis(500),
        ..Options::default()
    };

    match fetch_blocking(url, options).await {
        Err(FetchError::Timeout(limit)) => assert_eq!(limit, Duration::from_millis(500)),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn connection_refused_is_a_request_error() {
    // Bind then drop a listener to get a port nothing is listening on.
    let port = match std::net::TcpListener::bind("127.0.0.1:0").and_then(|l| l.local_addr()) {
        Ok(addr) => addr.port(),
        Err(err) => panic!("could not reserve a port: {err}"),
    };

    match fetch_blocking(format!("http://127.0.0.1:{port}/"), Options::default()).await {
        Err(FetchError::Request(_)) => {}
        other => panic!("expected Request error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_url_is_rejected() {
    match fetch_blocking("::not-a-url::".to_string(), Options::default()).await {
        Err(FetchError::InvalidUrl { url, .. }) => assert_eq!(url, "::not-a-url::"),
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_article_fetches_and_extracts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/note"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(ARTICLE_HTML, "text/html"))
        .mount(&server)
        .await;

    let url = format!("{}/note", server.uri());
    let joined = tokio::task::spawn_blocking(move || fetch_article(&url, &Options::default())).await;

    match joined {
        Ok(Ok(article)) => {
            assert_eq!(article.title, "A Note About Commit Messages");
            assert!(article.text_content.contains("imperative"));
            assert_eq!(article.length, article.text_content.chars().count());
        }
        Ok(Err(err)) => panic!("expected an article, got {err}"),
        Err(err) => panic!("blocking task panicked: {err}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_article_tags_fetch_errors_with_url() {
    let joined = tokio::task::spawn_blocking(|| fetch_article("ftp://example.com/", &Options::default())).await;

    match joined {
        Ok(Err(err @ Error::Fetch { .. })) => {
            assert_eq!(err.url(), "ftp://example.com/");
            assert_eq!(err.stage(), "fetch");
        }
        Ok(other) => panic!("expected a fetch error, got {other:?}"),
        Err(err) => panic!("blocking task panicked: {err}"),
    }
}
