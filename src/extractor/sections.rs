//! Large text blocks: abstract, description, claims.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{ABSTRACT, CLAIMS, DESCRIPTION};

/// Placed in the abstract when it was requested but the page has none.
///
/// Downstream consumers compare against this exact string to tell
/// "requested but missing" apart from "not requested" (empty string).
pub const ABSTRACT_NOT_FOUND: &str = "Abstract not found";

/// Abstract text, or [`ABSTRACT_NOT_FOUND`].
#[must_use]
pub fn extract_abstract(scope: &Selection) -> String {
    dom::find_first(scope, ABSTRACT)
        .map_or_else(|| ABSTRACT_NOT_FOUND.to_string(), |node| dom::visible_text(&node))
}

/// Description text, one line per text run; `""` when absent.
#[must_use]
pub fn extract_description(scope: &Selection) -> String {
    section_text(scope, DESCRIPTION)
}

/// Claims text, one line per text run; `""` when absent.
#[must_use]
pub fn extract_claims(scope: &Selection) -> String {
    section_text(scope, CLAIMS)
}

fn section_text(scope: &Selection, selector: &str) -> String {
    dom::lookup_or_default(scope, selector, |section| dom::separated_text(section, "\n"))
}
