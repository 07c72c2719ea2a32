pub mod crawler;
pub mod error;
pub mod record;
pub mod source;

pub use crawler::{Crawler, Origin, ProgressCallback};
pub use error::{CrawlError, SourceError};
pub use record::{CrawlIssue, CrawlReport, PageRecord};
pub use source::{Clock, LinkSource, StaticSource, SystemClock};
