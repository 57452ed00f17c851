//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! crawl cycle end-to-end with the real HTTP fetcher.

use sitecopy::config::CrawlConfig;
use sitecopy::crawler::{run_crawl, CrawlEngine};
use sitecopy::state::ResourceState;
use sitecopy::url::site_domain;
use sitecopy::CopyError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration for a crawl rooted at the mock server
fn create_test_config(server: &MockServer, output: &Path) -> CrawlConfig {
    CrawlConfig::new(format!("{}/", server.uri())).with_output_root(output)
}

/// Directory the mock server's files are mirrored into
fn site_dir(server: &MockServer, output: &Path) -> PathBuf {
    output.join(site_domain(&server.uri()).expect("Failed to extract domain"))
}

/// Lists files under `root`, relative and sorted
fn list_files(root: &Path) -> Vec<PathBuf> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<PathBuf>) {
        for entry in std::fs::read_dir(dir).expect("Failed to read dir") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                out.push(path.strip_prefix(root).unwrap().to_path_buf());
            }
        }
    }

    let mut files = Vec::new();
    walk(root, root, &mut files);
    files.sort();
    files
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html")
}

fn css(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/css")
}

#[tokio::test]
async fn test_mirror_page_and_stylesheet() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<html><head><link rel="stylesheet" href="/style.css"></head>
               <body><img src="https://other.com/x.png"></body></html>"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/style.css"))
        .respond_with(css("body { color: black; }"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stats = run_crawl(create_test_config(&mock_server, output.path()))
        .await
        .expect("Crawl failed");

    let site = site_dir(&mock_server, output.path());
    assert_eq!(
        list_files(output.path()),
        vec![
            site.join("index.html").strip_prefix(output.path()).unwrap().to_path_buf(),
            site.join("style.css").strip_prefix(output.path()).unwrap().to_path_buf(),
        ]
    );
    assert!(!output.path().join("other.com").exists());
    assert_eq!(stats.saved(), 2);

    let saved = std::fs::read_to_string(site.join("style.css")).unwrap();
    assert_eq!(saved, "body { color: black; }");
}

#[tokio::test]
async fn test_css_references_are_followed() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<link rel="stylesheet" href="/styles/main.css">"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/styles/main.css"))
        .respond_with(css("body{background:url('/img/bg.png')}"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/img/bg.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0x89, 0x50, 0x4e, 0x47], "image/png"))
        .expect(1)
        .mount(&mock_server)
        .await;

    run_crawl(create_test_config(&mock_server, output.path()))
        .await
        .expect("Crawl failed");

    let site = site_dir(&mock_server, output.path());
    assert_eq!(
        std::fs::read(site.join("img/bg.png")).unwrap(),
        vec![0x89, 0x50, 0x4e, 0x47]
    );
}

#[tokio::test]
async fn test_redirect_to_other_site_is_not_saved() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/away">Away</a>"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/away"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{}/landing", other_server.uri()).as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // The landing page links back, but it must not be used as a link source
    Mock::given(method("GET"))
        .and(path("/landing"))
        .respond_with(html(&format!(
            r#"<a href="{}/secret">Secret</a>"#,
            mock_server.uri()
        )))
        .expect(1)
        .mount(&other_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/secret"))
        .respond_with(html("secret"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server, output.path());
    let mut engine = CrawlEngine::new(config).expect("Failed to create engine");
    let stats = engine.run().await.expect("Crawl failed");

    assert_eq!(stats.count(ResourceState::OutOfScope), 1);
    assert_eq!(list_files(output.path()).len(), 1);
    assert!(!site_dir(&other_server, output.path()).exists());
}

#[tokio::test]
async fn test_seed_redirect_is_fetched_once() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/home/", mock_server.uri()).as_str()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/home/"))
        .respond_with(html(r#"<a href="/">Start</a><a href="./">Self</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let stats = run_crawl(create_test_config(&mock_server, output.path()))
        .await
        .expect("Crawl failed");

    assert!(site_dir(&mock_server, output.path())
        .join("home/index.html")
        .is_file());
    assert_eq!(stats.saved(), 1);
}

#[tokio::test]
async fn test_broken_links_do_not_abort() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(
            r#"<a href="/missing">Missing</a><a href="/error">Error</a><a href="/fine">Fine</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fine"))
        .respond_with(html("fine"))
        .mount(&mock_server)
        .await;

    let stats = run_crawl(create_test_config(&mock_server, output.path()))
        .await
        .expect("Crawl should complete despite broken links");

    assert_eq!(stats.count(ResourceState::FetchFailed), 2);
    assert!(site_dir(&mock_server, output.path()).join("fine").is_file());
}

#[tokio::test]
async fn test_initial_error_is_fatal() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = run_crawl(create_test_config(&mock_server, output.path())).await;

    assert!(matches!(result, Err(CopyError::InitialFetch { .. })));
}

#[tokio::test]
async fn test_user_agent_sent_on_every_request() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    // Requests without the header fall through to wiremock's 404
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(html(r#"<script src="/app.js"></script>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/app.js"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"console.log(1)".to_vec(), "application/javascript"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let stats = run_crawl(create_test_config(&mock_server, output.path()))
        .await
        .expect("Crawl failed");

    assert_eq!(stats.saved(), 2);
}

#[tokio::test]
async fn test_max_depth_limits_fetches() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(r#"<a href="/level1">1</a>"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/level1"))
        .respond_with(html(r#"<a href="/level2">2</a>"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(html("too deep"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server, output.path()).with_max_depth(Some(1));
    let stats = run_crawl(config).await.expect("Crawl failed");

    assert_eq!(stats.count(ResourceState::DepthExceeded), 1);
}

#[tokio::test]
async fn test_output_root_is_created() {
    let mock_server = MockServer::start().await;
    let output = TempDir::new().unwrap();
    let nested = output.path().join("a/b/downloaded");

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html("home"))
        .mount(&mock_server)
        .await;

    run_crawl(create_test_config(&mock_server, &nested))
        .await
        .expect("Crawl failed");

    assert!(site_dir(&mock_server, &nested).join("index.html").is_file());
}
