use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A page accepted into the crawl result. The url is kept exactly as the
/// link source handed it over; the date is day-granular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub url: String,
    pub discovered_on: NaiveDate,
}

/// A non-fatal problem hit while expanding one page. The page itself stays
/// in the result when it was already accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlIssue {
    pub url: String,
    pub reason: String,
}

/// Everything a finished crawl produced: the ordered, deduplicated page
/// records plus any per-page issues collected along the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlReport {
    pub pages: Vec<PageRecord>,
    pub issues: Vec<CrawlIssue>,
}

impl CrawlReport {
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.url.as_str())
    }
}
