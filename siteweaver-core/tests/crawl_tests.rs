// Tests for crawl orchestration over a site graph

use siteweaver_core::SiteGraph;
use siteweaver_core::crawl::{CrawlOptions, execute_crawl, extract_url_path, generate_crawl_summary};
use std::sync::{Arc, Mutex};

fn graph() -> SiteGraph {
    SiteGraph::from_json(
        r#"{
          "pages": {
            "https://example.com": {
              "links": [
                "https://example.com/about",
                "https://example.com/down",
                "https://external.com/x"
              ]
            },
            "https://example.com/about": {
              "links": ["https://example.com/team"]
            },
            "https://example.com/down": { "unreachable": true }
          }
        }"#,
    )
    .unwrap()
}

fn options(start: &str) -> CrawlOptions {
    CrawlOptions {
        start: start.to_string(),
        max_pages: 50,
        max_depth: 3,
    }
}

// ============================================================================
// End-to-End Crawl Tests
// ============================================================================

#[tokio::test]
async fn test_execute_crawl_orders_and_bounds() {
    let report = execute_crawl(graph(), &options("https://example.com"), None)
        .await
        .unwrap();

    let urls: Vec<&str> = report.urls().collect();
    assert_eq!(
        urls,
        vec![
            "https://example.com",
            "https://example.com/about",
            "https://example.com/team",
            "https://example.com/down",
        ]
    );
    // Unreachable page is recorded but flagged as an issue.
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].url, "https://example.com/down");
}

#[tokio::test]
async fn test_execute_crawl_respects_page_ceiling() {
    let mut opts = options("https://example.com");
    opts.max_pages = 2;

    let report = execute_crawl(graph(), &opts, None).await.unwrap();
    assert_eq!(report.pages.len(), 2);
}

#[tokio::test]
async fn test_execute_crawl_invalid_start() {
    let result = execute_crawl(graph(), &options("no scheme here"), None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_execute_crawl_progress_callback() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();

    let report = execute_crawl(
        graph(),
        &options("https://example.com"),
        Some(Arc::new(move |_depth, url| {
            seen_clone.lock().unwrap().push(url);
        })),
    )
    .await
    .unwrap();

    assert_eq!(seen.lock().unwrap().len(), report.pages.len());
}

// ============================================================================
// Summary Tests
// ============================================================================

#[tokio::test]
async fn test_generate_crawl_summary_contents() {
    let report = execute_crawl(graph(), &options("https://example.com"), None)
        .await
        .unwrap();
    let summary = generate_crawl_summary(&report);

    assert!(summary.contains("Pages discovered: 4"));
    assert!(summary.contains("Expansion issues: 1"));
    assert!(summary.contains("## example.com"));
    assert!(summary.contains("  /about"));
    assert!(summary.contains("[!] https://example.com/down"));
}

// ============================================================================
// URL Path Extraction Tests
// ============================================================================

#[test]
fn test_extract_url_path_root() {
    assert_eq!(extract_url_path("http://example.com/"), "/");
}

#[test]
fn test_extract_url_path_empty_path() {
    assert_eq!(extract_url_path("http://example.com"), "/");
}

#[test]
fn test_extract_url_path_nested() {
    assert_eq!(extract_url_path("http://example.com/a/b/c"), "/a/b/c");
}

#[test]
fn test_extract_url_path_with_query() {
    assert_eq!(extract_url_path("http://example.com/a?k=v"), "/a");
}

#[test]
fn test_extract_url_path_invalid_url() {
    assert_eq!(extract_url_path("not a valid url"), "not a valid url");
}
