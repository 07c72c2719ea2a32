// Google sitemap extensions: image, video and news variants. Each entry
// carries the page it was found on; one <url> element is emitted per entry.

use crate::xml::push_element;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Page the image appears on. Filled in from the graph key when the
    /// entry comes out of a site graph document.
    #[serde(default)]
    pub page: String,
    pub loc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoEntry {
    #[serde(default)]
    pub page: String,
    pub content_loc: String,
    pub thumbnail_loc: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsEntry {
    #[serde(default)]
    pub page: String,
    pub title: String,
    pub publication: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub published: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
}

fn default_language() -> String {
    "en".to_string()
}

pub fn generate_image_sitemap_xml(images: &[ImageEntry]) -> String {
    if images.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n");
    out.push_str("        xmlns:image=\"http://www.google.com/schemas/sitemap-image/1.1\">\n");

    for image in images {
        out.push_str("  <url>\n");
        push_element(&mut out, "    ", "loc", &image.page);
        out.push_str("    <image:image>\n");
        push_element(&mut out, "      ", "image:loc", &image.loc);
        if let Some(ref caption) = image.caption {
            push_element(&mut out, "      ", "image:caption", caption);
        }
        if let Some(ref title) = image.title {
            push_element(&mut out, "      ", "image:title", title);
        }
        if let Some(ref license) = image.license {
            push_element(&mut out, "      ", "image:license", license);
        }
        out.push_str("    </image:image>\n");
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>\n");
    out
}

pub fn generate_video_sitemap_xml(videos: &[VideoEntry]) -> String {
    if videos.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n");
    out.push_str("        xmlns:video=\"http://www.google.com/schemas/sitemap-video/1.1\">\n");

    for video in videos {
        out.push_str("  <url>\n");
        push_element(&mut out, "    ", "loc", &video.page);
        out.push_str("    <video:video>\n");
        push_element(&mut out, "      ", "video:thumbnail_loc", &video.thumbnail_loc);
        push_element(&mut out, "      ", "video:title", &video.title);
        if let Some(ref description) = video.description {
            push_element(&mut out, "      ", "video:description", description);
        }
        push_element(&mut out, "      ", "video:content_loc", &video.content_loc);
        if let Some(duration) = video.duration_secs {
            push_element(&mut out, "      ", "video:duration", &duration.to_string());
        }
        if let Some(published) = video.published {
            push_element(&mut out, "      ", "video:publication_date", &published.to_rfc3339());
        }
        out.push_str("    </video:video>\n");
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>\n");
    out
}

pub fn generate_news_sitemap_xml(articles: &[NewsEntry]) -> String {
    if articles.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\"\n");
    out.push_str("        xmlns:news=\"http://www.google.com/schemas/sitemap-news/0.9\">\n");

    for article in articles {
        out.push_str("  <url>\n");
        push_element(&mut out, "    ", "loc", &article.page);
        out.push_str("    <news:news>\n");
        out.push_str("      <news:publication>\n");
        push_element(&mut out, "        ", "news:name", &article.publication);
        push_element(&mut out, "        ", "news:language", &article.language);
        out.push_str("      </news:publication>\n");
        push_element(&mut out, "      ", "news:publication_date", &article.published.to_rfc3339());
        push_element(&mut out, "      ", "news:title", &article.title);
        if !article.keywords.is_empty() {
            push_element(&mut out, "      ", "news:keywords", &article.keywords.join(", "));
        }
        if !article.genres.is_empty() {
            push_element(&mut out, "      ", "news:genres", &article.genres.join(", "));
        }
        out.push_str("    </news:news>\n");
        out.push_str("  </url>\n");
    }

    out.push_str("</urlset>\n");
    out
}
