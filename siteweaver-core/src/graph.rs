use crate::feed::FeedItem;
use crate::links::BrokenLink;
use crate::media::{ImageEntry, NewsEntry, VideoEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use siteweaver_crawler::{LinkSource, PageRecord, SourceError};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// One page in a site graph document: its outgoing links plus any authored
/// content metadata the formatters can use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageEntry {
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<VideoEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub news: Option<NewsEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub broken_links: Vec<BrokenLink>,
    /// Marks a page whose links cannot be enumerated. The crawler records
    /// the page and reports the failed expansion as an issue.
    #[serde(default)]
    pub unreachable: bool,
}

/// A declarative description of a site: page URL -> entry. This is what the
/// CLI feeds the crawler in place of live fetching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteGraph {
    #[serde(default)]
    pub pages: HashMap<String, PageEntry>,
}

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("failed to read site graph {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse site graph {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl SiteGraph {
    pub fn load(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path).map_err(|source| GraphError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let graph: SiteGraph =
            serde_json::from_str(&content).map_err(|source| GraphError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        debug!("Loaded site graph {} with {} pages", path.display(), graph.pages.len());
        Ok(graph)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Feed items for the discovered pages, in crawl order. Pages carrying
    /// authored metadata (title, summary or publication date) are preferred;
    /// when none do, every discovered page becomes an item titled by its URL.
    pub fn feed_items(&self, pages: &[PageRecord]) -> Vec<FeedItem> {
        let items: Vec<FeedItem> = pages
            .iter()
            .filter_map(|record| {
                let entry = self.pages.get(&record.url)?;
                if entry.title.is_none() && entry.summary.is_none() && entry.published.is_none() {
                    return None;
                }
                Some(FeedItem {
                    title: entry.title.clone().unwrap_or_else(|| record.url.clone()),
                    link: record.url.clone(),
                    description: entry.summary.clone().unwrap_or_default(),
                    published: entry.published,
                    guid: record.url.clone(),
                })
            })
            .collect();

        if !items.is_empty() {
            return items;
        }

        pages
            .iter()
            .map(|record| FeedItem {
                title: record.url.clone(),
                link: record.url.clone(),
                description: String::new(),
                published: None,
                guid: record.url.clone(),
            })
            .collect()
    }

    /// Images on the discovered pages, with `page` filled in from the key.
    pub fn image_entries(&self, pages: &[PageRecord]) -> Vec<ImageEntry> {
        self.collect_entries(pages, |entry| &entry.images, |image, page| {
            image.page = page.to_string();
        })
    }

    pub fn video_entries(&self, pages: &[PageRecord]) -> Vec<VideoEntry> {
        self.collect_entries(pages, |entry| &entry.videos, |video, page| {
            video.page = page.to_string();
        })
    }

    pub fn news_entries(&self, pages: &[PageRecord]) -> Vec<NewsEntry> {
        pages
            .iter()
            .filter_map(|record| {
                let mut article = self.pages.get(&record.url)?.news.clone()?;
                article.page = record.url.clone();
                Some(article)
            })
            .collect()
    }

    pub fn broken_links(&self, pages: &[PageRecord]) -> Vec<BrokenLink> {
        self.collect_entries(pages, |entry| &entry.broken_links, |link, page| {
            link.found_on = page.to_string();
        })
    }

    fn collect_entries<T: Clone>(
        &self,
        pages: &[PageRecord],
        select: impl Fn(&PageEntry) -> &Vec<T>,
        stamp: impl Fn(&mut T, &str),
    ) -> Vec<T> {
        let mut out = Vec::new();
        for record in pages {
            if let Some(entry) = self.pages.get(&record.url) {
                for item in select(entry) {
                    let mut item = item.clone();
                    stamp(&mut item, &record.url);
                    out.push(item);
                }
            }
        }
        out
    }
}

/// `LinkSource` over a site graph document. Pages missing from the graph
/// simply have no outgoing links; pages marked unreachable fail per-page.
pub struct GraphSource {
    graph: SiteGraph,
}

impl GraphSource {
    pub fn new(graph: SiteGraph) -> Self {
        Self { graph }
    }
}

#[async_trait]
impl LinkSource for GraphSource {
    async fn links_from(&self, url: &str) -> Result<Vec<String>, SourceError> {
        match self.graph.pages.get(url) {
            Some(entry) if entry.unreachable => Err(SourceError::Unreachable(url.to_string())),
            Some(entry) => Ok(entry.links.clone()),
            None => Ok(Vec::new()),
        }
    }
}
