//! # rs-patent-scraper
//!
//! Structured record extraction from patent detail pages.
//!
//! Given the HTML of one patent page (as served by Google Patents), this
//! library pulls out the bibliographic data (title, numbers, dates, people),
//! the citation tables, the leaf classifications and, on request, the
//! abstract, description and claims. Fetching pages is left to the caller;
//! see [`batch::PageSource`] for the seam a fetcher plugs into.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_patent_scraper::{extract_html, Options};
//!
//! let html = r#"<html><head><meta name="DC.title" content="Hand tool"></head>
//! <body><dl><dd itemprop="inventor">Alice Example</dd></dl></body></html>"#;
//!
//! let record = extract_html(html, "US1234567A", "https://patents.google.com/patent/US1234567A", &Options::default())?;
//! assert_eq!(record.title, "Hand tool");
//! assert_eq!(record.inventors, vec!["Alice Example"]);
//! # Ok::<(), rs_patent_scraper::Error>(())
//! ```
//!
//! ## Missing data
//!
//! Extraction never fails because a field is missing. Each field falls back
//! to an empty string or empty list on its own. The one exception is the
//! abstract: when requested but absent it holds [`ABSTRACT_NOT_FOUND`].

mod error;
mod extract;
mod options;
mod result;

/// DOM lookup helpers with default-on-miss semantics.
pub mod dom;

/// CSS selectors for patent page markup and identifier patterns.
pub mod patterns;

/// Field extractors (events, citations, classifications, text sections).
pub mod extractor;

/// Patent URL and identifier utilities.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Parsed views over raw date text.
pub mod dates;

/// Batch scraping over a pluggable page source.
pub mod batch;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::ABSTRACT_NOT_FOUND;
pub use options::Options;
pub use result::{Citation, Classification, PatentRecord};

pub use dom_query::Document;

/// Extracts a patent record from an already parsed document.
///
/// # Arguments
///
/// * `document` - The parsed patent detail page
/// * `requested_identifier` - The identifier the caller asked for; copied into the record
/// * `resolved_url` - The URL the page was served from after redirects; copied into the record
/// * `options` - Which text blocks to extract
///
/// # Returns
///
/// Returns `Err(Error::InvalidDocument)` only when the document is empty.
/// Otherwise every field is filled in as far as the page allows.
///
/// # Example
///
/// ```rust
/// use rs_patent_scraper::{extract, Document, Options};
///
/// let doc = Document::from(r#"<dl><dd itemprop="publicationNumber">US8834455B2</dd></dl>"#);
/// let record = extract(&doc, "US2014262394", "https://patents.google.com/patent/US8834455B2/en", &Options::default())?;
/// assert_eq!(record.publication_number, "US8834455B2");
/// assert_eq!(record.requested_identifier, "US2014262394");
/// # Ok::<(), rs_patent_scraper::Error>(())
/// ```
pub fn extract(
    document: &Document,
    requested_identifier: &str,
    resolved_url: &str,
    options: &Options,
) -> Result<PatentRecord> {
    extract::extract_record(document, requested_identifier, resolved_url, options)
}

/// Extracts a patent record from an HTML string.
///
/// Whitespace-only input is rejected with `Error::InvalidDocument`.
pub fn extract_html(
    html: &str,
    requested_identifier: &str,
    resolved_url: &str,
    options: &Options,
) -> Result<PatentRecord> {
    if html.trim().is_empty() {
        return Err(Error::InvalidDocument("empty HTML input".to_string()));
    }
    let document = Document::from(html);
    extract(&document, requested_identifier, resolved_url, options)
}

/// Extracts a patent record from raw HTML bytes with charset detection.
///
/// The charset is taken from a byte-order mark or a `<meta charset>`
/// declaration, defaulting to UTF-8.
///
/// # Example
///
/// ```rust
/// use rs_patent_scraper::{extract_bytes, Options};
///
/// let html = b"<meta charset=\"iso-8859-1\"><dl><dd itemprop=\"inventor\">J\xF6rg</dd></dl>";
/// let record = extract_bytes(html, "DE1", "", &Options::default())?;
/// assert_eq!(record.inventors, vec!["Jörg"]);
/// # Ok::<(), rs_patent_scraper::Error>(())
/// ```
pub fn extract_bytes(
    html: &[u8],
    requested_identifier: &str,
    resolved_url: &str,
    options: &Options,
) -> Result<PatentRecord> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_html(&html_str, requested_identifier, resolved_url, options)
}
