//! CSS selectors and compiled regex patterns for patent pages.
//!
//! Selectors target the schema.org-style `itemprop` microdata that patent
//! detail pages carry. Patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Bibliographic Fields
// =============================================================================

/// Dublin Core title metadata; the title lives in its `content` attribute.
pub const TITLE_META: &str = "meta[name='DC.title']";

pub const INVENTOR: &str = "dd[itemprop='inventor']";
pub const ASSIGNEE_ORIGINAL: &str = "dd[itemprop='assigneeOriginal']";
pub const ASSIGNEE_CURRENT: &str = "dd[itemprop='assigneeCurrent']";

/// Qualified by `dd` so citation rows (which use `span`) never match.
pub const PUBLICATION_NUMBER: &str = "dd[itemprop='publicationNumber']";
pub const APPLICATION_NUMBER: &str = "dd[itemprop='applicationNumber']";
/// Qualified by `dd` so citation cells (which use `td`) never match.
pub const PUBLICATION_DATE: &str = "dd[itemprop='publicationDate']";
/// Older pages put the filing date on a `dd`, newer ones on a `span`.
pub const FILING_DATE: &str = "dd[itemprop='filingDate'], span[itemprop='filingDate']";
pub const LEGAL_STATUS: &str = "dd[itemprop='legalStatusIfi']";

// =============================================================================
// Event Timeline
// =============================================================================

pub const EVENT: &str = "dd[itemprop='events']";
pub const EVENT_TYPE: &str = "span[itemprop='type']";
pub const EVENT_DATE: &str = "time[itemprop='date']";
pub const EVENT_TITLE: &str = "span[itemprop='title']";

// =============================================================================
// Citation Tables
// =============================================================================

pub const FORWARD_CITATIONS_NO_FAMILY: &str = "tr[itemprop='forwardReferencesOrig']";
pub const FORWARD_CITATIONS_WITH_FAMILY: &str = "tr[itemprop='forwardReferencesFamily']";
pub const BACKWARD_CITATIONS_NO_FAMILY: &str = "tr[itemprop='backwardReferences']";
pub const BACKWARD_CITATIONS_WITH_FAMILY: &str = "tr[itemprop='backwardReferencesFamily']";

pub const CITATION_NUMBER: &str = "span[itemprop='publicationNumber']";
pub const CITATION_PRIORITY_DATE: &str = "td[itemprop='priorityDate']";
pub const CITATION_PUBLICATION_DATE: &str = "td[itemprop='publicationDate']";

// =============================================================================
// Classifications
// =============================================================================

pub const CLASSIFICATION_ITEM: &str = "li[itemprop='classifications']";
/// Marker present only on the most specific entry of a hierarchy.
pub const CLASSIFICATION_LEAF: &str = "meta[itemprop='Leaf'][content='true']";
pub const CLASSIFICATION_CODE: &str = "span[itemprop='Code']";
pub const CLASSIFICATION_DESCRIPTION: &str = "span[itemprop='Description']";

// =============================================================================
// Text Sections
// =============================================================================

pub const ABSTRACT: &str = ".abstract";
pub const DESCRIPTION: &str = "section[itemprop='description']";
pub const CLAIMS: &str = "section[itemprop='claims']";

// =============================================================================
// Identifier Patterns
// =============================================================================

/// Characters people put inside identifiers that the site ignores:
/// whitespace, dashes, slashes, commas and dots (`US-11,000,000 B2`).
pub static IDENTIFIER_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\-/,.]+").expect("IDENTIFIER_NOISE regex")
});

/// A canonical publication number: country code, serial, optional kind code.
pub static PUBLICATION_NUMBER_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{2}[A-Z]?\d{4,}(?:[A-Z]\d?)?$").expect("PUBLICATION_NUMBER_SHAPE regex")
});
