pub mod crawl;
pub mod feed;
pub mod graph;
pub mod links;
pub mod media;
pub mod output;
pub mod sitemap;

mod xml;

pub use graph::{GraphError, GraphSource, PageEntry, SiteGraph};
pub use output::OutputFormat;

use colored::Colorize;

pub fn print_banner() {
    println!(
        "{}",
        r#"
     _ _
 ___(_) |_ _____ __ _____ __ ___ _____ _ _
(_-< |  _/ -_) V  V / -_) _` \ V / -_) '_|
/__/_|\__\___|\_/\_/\___\__,_|\_/\___|_|
"#
        .cyan()
    );
    println!(
        "  {} v{}\n",
        "sitemaps, feeds and link reports from a site crawl".dimmed(),
        env!("CARGO_PKG_VERSION")
    );
}
