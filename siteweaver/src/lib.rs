// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{handle_generate, resolve_output_path};

// Re-export crawl functionality from siteweaver-core
pub use siteweaver_core::crawl::{CrawlOptions, execute_crawl, extract_url_path, generate_crawl_summary};
pub use siteweaver_core::{OutputFormat, SiteGraph};
