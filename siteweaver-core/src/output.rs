// Output format selection and rendering dispatch.

use crate::graph::SiteGraph;
use crate::{crawl, feed, links, media, sitemap};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use siteweaver_crawler::CrawlReport;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// sitemaps.org XML sitemap
    Xml,
    /// Standalone HTML sitemap page
    Html,
    /// RSS 2.0 feed
    Rss,
    /// Google image sitemap
    Image,
    /// Google video sitemap
    Video,
    /// Google news sitemap
    News,
    /// Plain-text broken-link report
    BrokenLinks,
    /// Raw crawl report as JSON
    Json,
    /// Plain-text crawl summary
    Text,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "xml" | "sitemap" => Some(OutputFormat::Xml),
            "html" => Some(OutputFormat::Html),
            "rss" | "feed" => Some(OutputFormat::Rss),
            "image" | "images" => Some(OutputFormat::Image),
            "video" | "videos" => Some(OutputFormat::Video),
            "news" => Some(OutputFormat::News),
            "broken-links" | "broken" => Some(OutputFormat::BrokenLinks),
            "json" => Some(OutputFormat::Json),
            "text" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    /// Default filename the rendered output is saved under, per host.
    /// None means the format is meant for the terminal.
    pub fn default_filename(&self, host: &str) -> Option<String> {
        match self {
            OutputFormat::Xml => Some(format!("{}-sitemap.xml", host)),
            OutputFormat::Html => Some(format!("{}-sitemap.html", host)),
            OutputFormat::Rss => Some(format!("{}-rss-feed.xml", host)),
            OutputFormat::Image => Some(format!("{}-image-sitemap.xml", host)),
            OutputFormat::Video => Some(format!("{}-video-sitemap.xml", host)),
            OutputFormat::News => Some(format!("{}-news-sitemap.xml", host)),
            OutputFormat::BrokenLinks => Some(format!("{}-broken-links.txt", host)),
            OutputFormat::Json => Some(format!("{}-crawl.json", host)),
            OutputFormat::Text => None,
        }
    }
}

/// Renders a finished crawl in the requested format. The crawl report is the
/// sole page source; the graph only contributes per-page metadata.
pub fn render(
    format: OutputFormat,
    graph: &SiteGraph,
    report: &CrawlReport,
    start: &str,
) -> Result<String, serde_json::Error> {
    let rendered = match format {
        OutputFormat::Xml => sitemap::generate_xml(&sitemap::from_records(&report.pages)),
        OutputFormat::Html => sitemap::generate_html(
            &sitemap::from_records(&report.pages),
            start,
            Utc::now().date_naive(),
        ),
        OutputFormat::Rss => {
            feed::generate_rss_xml(&graph.feed_items(&report.pages), start, Utc::now())
        }
        OutputFormat::Image => {
            media::generate_image_sitemap_xml(&graph.image_entries(&report.pages))
        }
        OutputFormat::Video => {
            media::generate_video_sitemap_xml(&graph.video_entries(&report.pages))
        }
        OutputFormat::News => media::generate_news_sitemap_xml(&graph.news_entries(&report.pages)),
        OutputFormat::BrokenLinks => {
            links::generate_broken_links_report(&graph.broken_links(&report.pages))
        }
        OutputFormat::Json => {
            let json_report = serde_json::json!({
                "report": {
                    "metadata": {
                        "generator": "Siteweaver",
                        "version": env!("CARGO_PKG_VERSION"),
                        "generated_at": Utc::now().to_rfc3339(),
                        "start": start,
                    },
                    "summary": {
                        "total_pages": report.pages.len(),
                        "total_issues": report.issues.len(),
                    },
                    "pages": report.pages,
                    "issues": report.issues,
                }
            });
            serde_json::to_string_pretty(&json_report)?
        }
        OutputFormat::Text => crawl::generate_crawl_summary(report),
    };
    Ok(rendered)
}

pub fn save_output(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
