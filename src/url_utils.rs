//! URL utilities for patent detail pages.
//!
//! Builds the URLs a page source needs and recovers the canonical
//! publication number from the URL a request finally resolved to.

use url::Url;

use crate::patterns::{IDENTIFIER_NOISE, PUBLICATION_NUMBER_SHAPE};

/// Base of every patent detail and search URL.
pub const PATENTS_BASE_URL: &str = "https://patents.google.com";

/// Normalize a user-typed identifier: drop separators and uppercase.
///
/// ```
/// use rs_patent_scraper::url_utils::normalize_identifier;
///
/// assert_eq!(normalize_identifier(" us-11,000,000-b2 "), "US11000000B2");
/// ```
#[must_use]
pub fn normalize_identifier(identifier: &str) -> String {
    IDENTIFIER_NOISE
        .replace_all(identifier.trim(), "")
        .to_ascii_uppercase()
}

/// Detail page URL for a publication number.
///
/// The identifier is normalized first. An identifier that is not a
/// canonical publication number still yields a URL; the site answers it
/// with a not-found page.
#[must_use]
pub fn patent_url(identifier: &str) -> String {
    format!("{PATENTS_BASE_URL}/patent/{}", normalize_identifier(identifier))
}

/// Search URL that redirects an alternate identifier (such as an
/// application publication number) to its canonical detail page.
#[must_use]
pub fn search_url(identifier: &str) -> String {
    match Url::parse_with_params(
        &format!("{PATENTS_BASE_URL}/"),
        &[("oq", identifier.trim())],
    ) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{PATENTS_BASE_URL}/?oq={}", identifier.trim()),
    }
}

/// Canonical publication number from a resolved detail page URL.
///
/// Accepts `/patent/<ID>` with an optional trailing language segment
/// (`/patent/US8834455B2/en`). Returns `None` for any other shape.
#[must_use]
pub fn identifier_from_url(resolved_url: &str) -> Option<String> {
    let url = Url::parse(resolved_url.trim()).ok()?;
    let mut segments = url.path_segments()?;

    if segments.next()? != "patent" {
        return None;
    }

    let candidate = segments.next()?.to_ascii_uppercase();
    PUBLICATION_NUMBER_SHAPE
        .is_match(&candidate)
        .then_some(candidate)
}

/// Whether the resolved URL points at a different document than the one
/// requested, i.e. the site redirected an alternate identifier.
#[must_use]
pub fn was_redirected(requested_identifier: &str, resolved_url: &str) -> bool {
    identifier_from_url(resolved_url)
        .is_some_and(|resolved| resolved != normalize_identifier(requested_identifier))
}
