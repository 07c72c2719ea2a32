// Tests for XML/HTML sitemap generation

use chrono::NaiveDate;
use siteweaver_core::sitemap::{ChangeFreq, SitemapUrl, from_records, generate_html, generate_xml};
use siteweaver_crawler::PageRecord;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn records() -> Vec<PageRecord> {
    vec![
        PageRecord {
            url: "https://example.com".to_string(),
            discovered_on: day(),
        },
        PageRecord {
            url: "https://example.com/about".to_string(),
            discovered_on: day(),
        },
    ]
}

// ============================================================================
// Record Mapping Tests
// ============================================================================

#[test]
fn test_from_records_priorities() {
    let urls = from_records(&records());
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0].priority, Some(1.0));
    assert_eq!(urls[1].priority, Some(0.8));
}

#[test]
fn test_from_records_defaults() {
    let urls = from_records(&records());
    assert_eq!(urls[0].loc, "https://example.com");
    assert_eq!(urls[0].lastmod, Some(day()));
    assert_eq!(urls[0].changefreq, Some(ChangeFreq::Weekly));
}

#[test]
fn test_from_records_empty() {
    let urls = from_records(&[]);
    assert!(urls.is_empty());
}

// ============================================================================
// XML Sitemap Tests
// ============================================================================

#[test]
fn test_generate_xml_structure() {
    let xml = generate_xml(&from_records(&records()));

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">"));
    assert!(xml.contains("<loc>https://example.com</loc>"));
    assert!(xml.contains("<loc>https://example.com/about</loc>"));
    assert!(xml.contains("<lastmod>2024-06-01</lastmod>"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
    assert!(xml.contains("<priority>1.0</priority>"));
    assert!(xml.contains("<priority>0.8</priority>"));
    assert!(xml.trim_end().ends_with("</urlset>"));
}

#[test]
fn test_generate_xml_escapes_special_characters() {
    let urls = vec![SitemapUrl {
        loc: "https://example.com/search?q=a&b=<c>".to_string(),
        lastmod: None,
        changefreq: None,
        priority: None,
    }];
    let xml = generate_xml(&urls);

    assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=&lt;c&gt;</loc>"));
    assert!(!xml.contains("q=a&b"));
}

#[test]
fn test_generate_xml_omits_optional_fields() {
    let urls = vec![SitemapUrl {
        loc: "https://example.com".to_string(),
        lastmod: None,
        changefreq: None,
        priority: None,
    }];
    let xml = generate_xml(&urls);

    assert!(!xml.contains("<lastmod>"));
    assert!(!xml.contains("<changefreq>"));
    assert!(!xml.contains("<priority>"));
}

#[test]
fn test_generate_xml_empty_is_valid_urlset() {
    let xml = generate_xml(&[]);
    assert!(xml.contains("<urlset"));
    assert!(xml.contains("</urlset>"));
    assert!(!xml.contains("<url>"));
}

// ============================================================================
// HTML Sitemap Tests
// ============================================================================

#[test]
fn test_generate_html_contains_host_and_stats() {
    let html = generate_html(&from_records(&records()), "https://example.com", day());

    assert!(html.contains("<title>Sitemap for example.com</title>"));
    assert!(html.contains("<strong>Total URLs:</strong> 2"));
    assert!(html.contains("<strong>Generated:</strong> 2024-06-01"));
    assert!(html.contains("href=\"https://example.com/about\""));
}

#[test]
fn test_generate_html_meta_line() {
    let html = generate_html(&from_records(&records()), "https://example.com", day());
    assert!(html.contains("Last Modified: 2024-06-01 | Change Frequency: weekly | Priority: 1.0"));
}

#[test]
fn test_generate_html_escapes_urls() {
    let urls = vec![SitemapUrl {
        loc: "https://example.com/a?x=1&y=2".to_string(),
        lastmod: None,
        changefreq: None,
        priority: None,
    }];
    let html = generate_html(&urls, "https://example.com", day());

    assert!(html.contains("https://example.com/a?x=1&amp;y=2"));
}
