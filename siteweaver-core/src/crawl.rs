use crate::graph::{GraphSource, SiteGraph};
use siteweaver_crawler::{CrawlError, CrawlReport, Crawler, ProgressCallback};
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

/// Options for configuring a crawl over a site graph
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub start: String,
    pub max_pages: usize,
    pub max_depth: usize,
}

/// Extract the path component from a URL
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() || path == "/" {
                "/".to_string()
            } else {
                path
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Runs a bounded crawl of the given site graph and returns the report.
pub async fn execute_crawl(
    graph: SiteGraph,
    options: &CrawlOptions,
    progress_callback: Option<ProgressCallback>,
) -> Result<CrawlReport, CrawlError> {
    let mut crawler = Crawler::new(Arc::new(GraphSource::new(graph)))
        .with_max_pages(options.max_pages)
        .with_max_depth(options.max_depth);

    if let Some(callback) = progress_callback {
        crawler = crawler.with_progress_callback(callback);
    }

    crawler.traverse(&options.start).await
}

/// Generate a plain-text summary of a finished crawl
pub fn generate_crawl_summary(report: &CrawlReport) -> String {
    let mut summary = String::new();
    summary.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    summary.push_str("# Summary:\n");
    summary.push_str(&format!("  Pages discovered: {}\n", report.pages.len()));
    summary.push_str(&format!("  Expansion issues: {}\n", report.issues.len()));
    summary.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    // Group pages by host
    let mut by_host: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for page in &report.pages {
        if let Ok(url) = Url::parse(&page.url)
            && let Some(host) = url.host_str()
        {
            by_host.entry(host.to_string()).or_default().push(&page.url);
        }
    }

    for (host, urls) in by_host {
        summary.push_str(&format!("## {}\n", host));
        summary.push_str(&format!("  {} pages found\n\n", urls.len()));
        for url in urls {
            summary.push_str(&format!("  {}\n", extract_url_path(url)));
        }
        summary.push('\n');
    }

    if !report.issues.is_empty() {
        summary.push_str("## Issues\n");
        for issue in &report.issues {
            summary.push_str(&format!("  [!] {}: {}\n", issue.url, issue.reason));
        }
        summary.push('\n');
    }

    summary
}
