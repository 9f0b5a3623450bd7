//! Core record extraction.
//!
//! Turns one parsed patent detail page into a [`PatentRecord`]. Every field
//! is an independent lookup; a miss leaves that field at its default and the
//! rest of the record is still filled in.

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::extractor::{self, EventDates};
use crate::options::Options;
use crate::patterns::{
    APPLICATION_NUMBER, ASSIGNEE_CURRENT, ASSIGNEE_ORIGINAL, BACKWARD_CITATIONS_NO_FAMILY,
    BACKWARD_CITATIONS_WITH_FAMILY, FILING_DATE, FORWARD_CITATIONS_NO_FAMILY,
    FORWARD_CITATIONS_WITH_FAMILY, INVENTOR, LEGAL_STATUS, PUBLICATION_DATE, PUBLICATION_NUMBER,
    TITLE_META,
};
use crate::result::PatentRecord;

/// Main entry point for record extraction from a parsed document.
pub(crate) fn extract_record(
    document: &Document,
    requested_identifier: &str,
    resolved_url: &str,
    options: &Options,
) -> Result<PatentRecord> {
    if !dom::has_content(document) {
        return Err(Error::InvalidDocument(
            "document has no elements or text".to_string(),
        ));
    }

    let scope = dom::root(document);

    let direct_publication_date = dom::lookup_text(&scope, PUBLICATION_DATE);
    let EventDates {
        priority,
        granted,
        publication,
        expiration,
    } = extractor::resolve_event_dates(&scope);

    // The `publication` event only stands in when the direct field is absent.
    let publication_date = if direct_publication_date.is_empty() {
        publication
    } else {
        direct_publication_date
    };

    let record = PatentRecord {
        title: dom::lookup_attr(&scope, TITLE_META, "content"),
        inventors: collect_texts(&scope, INVENTOR),
        assignee_original: collect_texts(&scope, ASSIGNEE_ORIGINAL),
        assignee_current: collect_texts(&scope, ASSIGNEE_CURRENT),
        publication_number: dom::lookup_text(&scope, PUBLICATION_NUMBER),
        application_number: dom::lookup_text(&scope, APPLICATION_NUMBER),
        filing_date: dom::lookup_text(&scope, FILING_DATE),
        publication_date,
        priority_date: priority,
        granted_date: granted,
        expiration_date: expiration,
        legal_status: dom::lookup_text(&scope, LEGAL_STATUS),
        forward_citations_no_family: extractor::extract_citations(&scope, FORWARD_CITATIONS_NO_FAMILY),
        forward_citations_with_family: extractor::extract_citations(&scope, FORWARD_CITATIONS_WITH_FAMILY),
        backward_citations_no_family: extractor::extract_citations(&scope, BACKWARD_CITATIONS_NO_FAMILY),
        backward_citations_with_family: extractor::extract_citations(&scope, BACKWARD_CITATIONS_WITH_FAMILY),
        classifications: extractor::extract_classifications(&scope),
        r#abstract: if options.include_abstract {
            extractor::extract_abstract(&scope)
        } else {
            String::new()
        },
        description: if options.include_description {
            extractor::extract_description(&scope)
        } else {
            String::new()
        },
        claims: if options.include_claims {
            extractor::extract_claims(&scope)
        } else {
            String::new()
        },
        source_url: resolved_url.to_string(),
        requested_identifier: requested_identifier.to_string(),
    };

    log_summary(&record);
    Ok(record)
}

/// Trimmed text of every match, in document order.
fn collect_texts(scope: &Selection, selector: &str) -> Vec<String> {
    dom::find_all(scope, selector)
        .iter()
        .map(dom::trimmed_text)
        .collect()
}

fn log_summary(record: &PatentRecord) {
    if record.title.is_empty() {
        tracing::trace!(identifier = %record.requested_identifier, "no title metadata");
    }
    if record.publication_number.is_empty() {
        tracing::trace!(identifier = %record.requested_identifier, "no publication number");
    }

    tracing::debug!(
        identifier = %record.requested_identifier,
        publication_number = %record.publication_number,
        inventors = record.inventors.len(),
        citations = record.citation_count(),
        classifications = record.classifications.len(),
        "extracted patent record"
    );
}
