//! Error types for rs-patent-scraper.
//!
//! Only whole-document and orchestration failures are errors. A field that
//! is missing from a page is never an error: it degrades to its empty value.

/// Error type for extraction and batch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input document is empty or has no usable structure.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// A batch run was started with no identifiers queued.
    #[error("no patents to scrape; add identifiers with `add_patent` first")]
    NoPatents,

    /// An identifier was empty or otherwise unusable.
    #[error("invalid patent identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The page source failed to deliver a page.
    #[error("failed to fetch {identifier}: {message}")]
    Fetch {
        /// Identifier that was requested.
        identifier: String,
        /// Description reported by the page source.
        message: String,
    },

    /// Rendering a record as JSON failed.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
