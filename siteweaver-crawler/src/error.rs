use thiserror::Error;

/// Failure of a whole crawl invocation. Only a bad start address aborts the
/// run; anything that goes wrong on a single page is reported as a
/// `CrawlIssue` instead.
#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid start address: {0}")]
    InvalidStart(String),
}

/// Per-page failure raised by a `LinkSource` when it cannot enumerate the
/// outgoing links of one address.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("address unreachable: {0}")]
    Unreachable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
