//! Result types for extraction output.
//!
//! This module defines the flat record produced for one patent page, along
//! with the citation and classification entries nested inside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::Result;

/// One row of a citation table.
///
/// Every field defaults to an empty string when the row lacks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citation {
    /// Publication number of the cited (or citing) document.
    pub patent_number: String,

    /// Priority date as printed on the page.
    pub priority_date: String,

    /// Publication date as printed on the page.
    pub publication_date: String,
}

/// A leaf entry of a classification hierarchy (e.g. CPC).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Classification {
    /// Classification code, e.g. `A01B1/00`.
    pub code: String,

    /// Human-readable description of the code.
    pub description: String,
}

/// Structured record extracted from one patent detail page.
///
/// Every field is always present. Absence on the page is represented by an
/// empty string or empty sequence, never by a missing key. Dates are kept as
/// the raw text found on the page; see [`PatentRecord::granted_on`] and
/// friends for parsed views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatentRecord {
    /// Document title from the page metadata.
    pub title: String,

    /// Inventor names in document order.
    pub inventors: Vec<String>,

    /// Original assignees in document order.
    pub assignee_original: Vec<String>,

    /// Current assignees in document order.
    pub assignee_current: Vec<String>,

    /// Canonical publication number of the page.
    pub publication_number: String,

    /// Application number.
    pub application_number: String,

    /// Filing date.
    pub filing_date: String,

    /// Publication date (direct field, or the `publication` event).
    pub publication_date: String,

    /// Priority date from the event timeline.
    pub priority_date: String,

    /// Grant date from the event timeline.
    pub granted_date: String,

    /// Anticipated or adjusted expiration date from the event timeline.
    pub expiration_date: String,

    /// Legal status label, e.g. `Active`.
    pub legal_status: String,

    /// Documents citing this one, excluding family-to-family citations.
    pub forward_citations_no_family: Vec<Citation>,

    /// Family-to-family citing documents.
    pub forward_citations_with_family: Vec<Citation>,

    /// Documents cited by this one, excluding family-to-family citations.
    pub backward_citations_no_family: Vec<Citation>,

    /// Family-to-family cited documents.
    pub backward_citations_with_family: Vec<Citation>,

    /// Leaf classifications in document order.
    pub classifications: Vec<Classification>,

    /// Abstract text (only when requested).
    pub r#abstract: String,

    /// Description text (only when requested).
    pub description: String,

    /// Claims text (only when requested).
    pub claims: String,

    /// URL the page was actually fetched from.
    pub source_url: String,

    /// Identifier the caller originally asked for.
    pub requested_identifier: String,
}

impl PatentRecord {
    /// Parsed priority date, if the raw text is a recognizable date.
    #[must_use]
    pub fn priority_on(&self) -> Option<NaiveDate> {
        dates::parse_date(&self.priority_date)
    }

    /// Parsed publication date.
    #[must_use]
    pub fn published_on(&self) -> Option<NaiveDate> {
        dates::parse_date(&self.publication_date)
    }

    /// Parsed grant date.
    #[must_use]
    pub fn granted_on(&self) -> Option<NaiveDate> {
        dates::parse_date(&self.granted_date)
    }

    /// Parsed expiration date.
    #[must_use]
    pub fn expires_on(&self) -> Option<NaiveDate> {
        dates::parse_date(&self.expiration_date)
    }

    /// Total number of citation rows across all four tables.
    #[must_use]
    pub fn citation_count(&self) -> usize {
        self.forward_citations_no_family.len()
            + self.forward_citations_with_family.len()
            + self.backward_citations_no_family.len()
            + self.backward_citations_with_family.len()
    }

    /// Render the record as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_serializes_every_key() {
        let value = serde_json::to_value(PatentRecord::default()).expect("serializable");
        let object = value.as_object().expect("record is an object");

        for key in [
            "title",
            "inventors",
            "assignee_original",
            "assignee_current",
            "publication_number",
            "application_number",
            "filing_date",
            "publication_date",
            "priority_date",
            "granted_date",
            "expiration_date",
            "legal_status",
            "forward_citations_no_family",
            "forward_citations_with_family",
            "backward_citations_no_family",
            "backward_citations_with_family",
            "classifications",
            "abstract",
            "description",
            "claims",
            "source_url",
            "requested_identifier",
        ] {
            assert!(object.contains_key(key), "missing key {key}");
        }
        assert_eq!(object.len(), 22);
    }

    #[test]
    fn test_nested_entries_use_exact_keys() {
        let record = PatentRecord {
            backward_citations_no_family: vec![Citation {
                patent_number: "US5000000A".to_string(),
                priority_date: "1989-01-01".to_string(),
                publication_date: "1991-03-19".to_string(),
            }],
            classifications: vec![Classification {
                code: "A01B1/00".to_string(),
                description: "Hand tools".to_string(),
            }],
            ..PatentRecord::default()
        };

        let value = serde_json::to_value(&record).expect("serializable");
        assert_eq!(
            value["backward_citations_no_family"][0],
            serde_json::json!({
                "patent_number": "US5000000A",
                "priority_date": "1989-01-01",
                "publication_date": "1991-03-19"
            })
        );
        assert_eq!(
            value["classifications"][0],
            serde_json::json!({"code": "A01B1/00", "description": "Hand tools"})
        );
    }

    #[test]
    fn test_parsed_date_accessors() {
        let record = PatentRecord {
            granted_date: "2014-09-16".to_string(),
            expiration_date: "not a date".to_string(),
            ..PatentRecord::default()
        };

        assert_eq!(record.granted_on(), NaiveDate::from_ymd_opt(2014, 9, 16));
        assert_eq!(record.expires_on(), None);
        assert_eq!(record.priority_on(), None);
    }

    #[test]
    fn test_citation_count_sums_all_tables() {
        let record = PatentRecord {
            forward_citations_no_family: vec![Citation::default(); 2],
            backward_citations_with_family: vec![Citation::default()],
            ..PatentRecord::default()
        };

        assert_eq!(record.citation_count(), 3);
    }
}
