//! Citation tables.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{CITATION_NUMBER, CITATION_PRIORITY_DATE, CITATION_PUBLICATION_DATE};
use crate::result::Citation;

/// Parse one citation table row. Each cell is looked up on its own and
/// defaults to `""`.
#[must_use]
pub fn parse_citation(row: &Selection) -> Citation {
    Citation {
        patent_number: dom::lookup_text(row, CITATION_NUMBER),
        priority_date: dom::lookup_text(row, CITATION_PRIORITY_DATE),
        publication_date: dom::lookup_text(row, CITATION_PUBLICATION_DATE),
    }
}

/// One citation per row matching `row_selector`, in row order.
#[must_use]
pub fn extract_citations(scope: &Selection, row_selector: &str) -> Vec<Citation> {
    dom::find_all(scope, row_selector)
        .iter()
        .map(parse_citation)
        .collect()
}
