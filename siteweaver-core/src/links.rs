use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrokenLink {
    pub url: String,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub reason: String,
    /// Page the dead link was seen on. Filled in from the graph key when the
    /// entry comes out of a site graph document.
    #[serde(default)]
    pub found_on: String,
}

/// Plain-text broken-link report, grouped by the page each link was found on.
pub fn generate_broken_links_report(links: &[BrokenLink]) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Broken links\n");
    report.push_str(&format!("  Total: {}\n\n", links.len()));
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    if links.is_empty() {
        report.push_str("No broken links recorded.\n");
        return report;
    }

    let mut by_page: BTreeMap<&str, Vec<&BrokenLink>> = BTreeMap::new();
    for link in links {
        by_page.entry(link.found_on.as_str()).or_default().push(link);
    }

    for (page, page_links) in by_page {
        report.push_str(&format!("## {}\n", page));
        for link in page_links {
            if link.status_code != 0 {
                report.push_str(&format!("  {} {}", link.status_code, link.url));
            } else {
                report.push_str(&format!("  --- {}", link.url));
            }
            if !link.reason.is_empty() {
                report.push_str(&format!("  ({})", link.reason));
            }
            report.push('\n');
        }
        report.push('\n');
    }

    report
}
