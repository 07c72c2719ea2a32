use crate::error::{CrawlError, Result};
use crate::record::{CrawlIssue, CrawlReport, PageRecord};
use crate::source::{Clock, LinkSource, SystemClock};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Called once per accepted page with the page's depth and address.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// The scheme + host + port a crawl is pinned to. Candidates outside it are
/// dropped without being visited or counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    /// None for URLs without a host (mailto:, data:, ...), which cannot
    /// anchor a same-origin walk.
    pub fn of(url: &Url) -> Option<Self> {
        url.host_str().map(|host| Origin {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port_or_known_default(),
        })
    }
}

/// Bounded same-origin crawler. Link enumeration is delegated to an injected
/// `LinkSource`, so the crawler itself performs no network I/O.
///
/// Each call to `traverse` owns its visited set and result list exclusively;
/// a single `Crawler` can serve independent traversals concurrently.
pub struct Crawler {
    source: Arc<dyn LinkSource>,
    clock: Arc<dyn Clock>,
    max_pages: usize,
    max_depth: usize,
    progress_callback: Option<ProgressCallback>,
}

impl Crawler {
    pub fn new(source: Arc<dyn LinkSource>) -> Self {
        Self {
            source,
            clock: Arc::new(SystemClock),
            max_pages: 100,
            max_depth: 3,
            progress_callback: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Walks the site reachable from `start` in pre-order, depth-first, in
    /// the order the link source reports children. Stops when the frontier
    /// is exhausted or either ceiling (`max_pages`, `max_depth`) is hit.
    ///
    /// Only a malformed `start` fails the call. A link source failure on one
    /// page is recorded as an issue and the walk moves on to the next
    /// candidate.
    pub async fn traverse(&self, start: &str) -> Result<CrawlReport> {
        let start_url = Url::parse(start)
            .map_err(|e| CrawlError::InvalidStart(format!("{}: {}", start, e)))?;
        let origin = Origin::of(&start_url)
            .ok_or_else(|| CrawlError::InvalidStart(format!("{}: no host", start)))?;

        info!("Starting crawl of {} (max {} pages, depth {})", start, self.max_pages, self.max_depth);

        let mut visited: HashSet<String> = HashSet::new();
        let mut report = CrawlReport::default();
        // LIFO frontier of (address, depth); children are pushed in reverse
        // so the first-listed child is expanded first.
        let mut frontier: Vec<(String, usize)> = vec![(start.to_string(), 0)];

        while let Some((url, depth)) = frontier.pop() {
            if report.pages.len() >= self.max_pages {
                break;
            }
            if visited.contains(&url) {
                continue;
            }

            let parsed = match Url::parse(&url) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Skipping malformed address {}: {}", url, e);
                    report.issues.push(CrawlIssue {
                        url,
                        reason: format!("malformed address: {}", e),
                    });
                    continue;
                }
            };

            if Origin::of(&parsed).as_ref() != Some(&origin) {
                debug!("Skipping cross-origin address {}", url);
                continue;
            }

            visited.insert(url.clone());
            if let Some(ref callback) = self.progress_callback {
                callback(depth, url.clone());
            }
            report.pages.push(PageRecord {
                url: url.clone(),
                discovered_on: self.clock.today(),
            });

            if depth >= self.max_depth || report.pages.len() >= self.max_pages {
                continue;
            }

            match self.source.links_from(&url).await {
                Ok(children) => {
                    for child in children.into_iter().rev() {
                        if !visited.contains(&child) {
                            frontier.push((child, depth + 1));
                        }
                    }
                }
                Err(e) => {
                    warn!("Could not expand {}: {}", url, e);
                    report.issues.push(CrawlIssue {
                        url,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Crawl complete. {} pages, {} issues",
            report.pages.len(),
            report.issues.len()
        );
        Ok(report)
    }
}
