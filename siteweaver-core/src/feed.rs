use crate::xml::push_element;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    pub guid: String,
}

/// Renders an RSS 2.0 channel for the site. Returns an empty string when
/// there are no items, mirroring "nothing to feed".
pub fn generate_rss_xml(items: &[FeedItem], site_url: &str, build_date: DateTime<Utc>) -> String {
    if items.is_empty() {
        return String::new();
    }

    let host = Url::parse(site_url)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
        .unwrap_or_else(|| site_url.to_string());

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n");
    out.push_str("  <channel>\n");
    push_element(&mut out, "    ", "title", &format!("{} RSS Feed", host));
    push_element(&mut out, "    ", "link", site_url);
    push_element(&mut out, "    ", "description", &format!("Latest content from {}", host));
    push_element(&mut out, "    ", "language", "en-us");
    push_element(&mut out, "    ", "lastBuildDate", &build_date.to_rfc2822());
    out.push_str(&format!(
        "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\" />\n",
        crate::xml::escape(&format!("{}/rss.xml", site_url.trim_end_matches('/')))
    ));

    for item in items {
        out.push_str("    <item>\n");
        push_element(&mut out, "      ", "title", &item.title);
        push_element(&mut out, "      ", "link", &item.link);
        push_element(&mut out, "      ", "description", &item.description);
        if let Some(published) = item.published {
            push_element(&mut out, "      ", "pubDate", &published.to_rfc2822());
        }
        out.push_str(&format!(
            "      <guid isPermaLink=\"true\">{}</guid>\n",
            crate::xml::escape(&item.guid)
        ));
        out.push_str("    </item>\n");
    }

    out.push_str("  </channel>\n");
    out.push_str("</rss>\n");
    out
}
