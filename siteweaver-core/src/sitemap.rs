use crate::xml::{escape, push_element};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use siteweaver_crawler::PageRecord;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapUrl {
    pub loc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<ChangeFreq>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<f32>,
}

/// Maps crawl records to sitemap entries. The first record (the start page)
/// gets priority 1.0, everything after it 0.8, all with a weekly change
/// frequency and the discovery date as lastmod.
pub fn from_records(pages: &[PageRecord]) -> Vec<SitemapUrl> {
    pages
        .iter()
        .enumerate()
        .map(|(idx, page)| SitemapUrl {
            loc: page.url.clone(),
            lastmod: Some(page.discovered_on),
            changefreq: Some(ChangeFreq::Weekly),
            priority: Some(if idx == 0 { 1.0 } else { 0.8 }),
        })
        .collect()
}

/// Renders a sitemaps.org urlset document.
pub fn generate_xml(urls: &[SitemapUrl]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for url in urls {
        out.push_str("  <url>\n");
        push_element(&mut out, "    ", "loc", &url.loc);
        if let Some(lastmod) = url.lastmod {
            push_element(&mut out, "    ", "lastmod", &lastmod.format("%Y-%m-%d").to_string());
        }
        if let Some(changefreq) = url.changefreq {
            push_element(&mut out, "    ", "changefreq", changefreq.as_str());
        }
        if let Some(priority) = url.priority {
            push_element(&mut out, "    ", "priority", &format!("{:.1}", priority));
        }
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>\n");
    out
}

/// Renders a human-readable standalone HTML sitemap page.
pub fn generate_html(urls: &[SitemapUrl], site_url: &str, generated_on: NaiveDate) -> String {
    let site_name = Url::parse(site_url)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
        .unwrap_or_else(|| site_url.to_string());

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!("    <title>Sitemap for {}</title>\n", escape(&site_name)));
    out.push_str(
        "    <style>\n\
         \x20       body { font-family: Arial, sans-serif; margin: 40px; line-height: 1.6; }\n\
         \x20       h1 { color: #333; border-bottom: 2px solid #0ea5e9; padding-bottom: 10px; }\n\
         \x20       .url-item { margin: 15px 0; padding: 15px; background: #f8fafc; border-left: 4px solid #0ea5e9; }\n\
         \x20       .url-link { color: #0ea5e9; text-decoration: none; font-weight: bold; }\n\
         \x20       .url-link:hover { text-decoration: underline; }\n\
         \x20       .url-meta { color: #666; font-size: 0.9em; margin-top: 5px; }\n\
         \x20       .stats { background: #e0f2fe; padding: 20px; border-radius: 8px; margin-bottom: 30px; }\n\
         \x20   </style>\n",
    );
    out.push_str("</head>\n<body>\n");
    out.push_str(&format!("    <h1>Sitemap for {}</h1>\n", escape(&site_name)));
    out.push_str("    <div class=\"stats\">\n");
    out.push_str(&format!("        <strong>Total URLs:</strong> {}<br>\n", urls.len()));
    out.push_str(&format!(
        "        <strong>Generated:</strong> {}\n",
        generated_on.format("%Y-%m-%d")
    ));
    out.push_str("    </div>\n");

    for url in urls {
        let mut meta = Vec::new();
        if let Some(lastmod) = url.lastmod {
            meta.push(format!("Last Modified: {}", lastmod.format("%Y-%m-%d")));
        }
        if let Some(changefreq) = url.changefreq {
            meta.push(format!("Change Frequency: {}", changefreq.as_str()));
        }
        if let Some(priority) = url.priority {
            meta.push(format!("Priority: {:.1}", priority));
        }

        out.push_str("    <div class=\"url-item\">\n");
        out.push_str(&format!(
            "        <a href=\"{}\" class=\"url-link\">{}</a>\n",
            escape(&url.loc),
            escape(&url.loc)
        ));
        if !meta.is_empty() {
            out.push_str(&format!(
                "        <div class=\"url-meta\">{}</div>\n",
                escape(&meta.join(" | "))
            ));
        }
        out.push_str("    </div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}
