use crate::error::SourceError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;

/// The injected link-enumeration collaborator. Implementations may do real
/// I/O (and fail per call); the crawler never assumes purity and recovers
/// from individual failures.
#[async_trait]
pub trait LinkSource: Send + Sync {
    /// Returns the candidate child addresses of `url`, in the order they
    /// should be explored.
    async fn links_from(&self, url: &str) -> Result<Vec<String>, SourceError>;
}

/// Injected time source so page records can be timestamped deterministically
/// in tests.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock UTC dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// In-memory link source over a fixed adjacency map. Pages absent from the
/// map simply have no outgoing links.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    links: HashMap<String, Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_links(mut self, url: impl Into<String>, children: Vec<String>) -> Self {
        self.links.insert(url.into(), children);
        self
    }
}

#[async_trait]
impl LinkSource for StaticSource {
    async fn links_from(&self, url: &str) -> Result<Vec<String>, SourceError> {
        Ok(self.links.get(url).cloned().unwrap_or_default())
    }
}
