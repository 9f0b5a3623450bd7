//! Field extractors for patent detail pages.
//!
//! Each sub-module reads one family of fields from a document scope and
//! returns its empty default when the markup is missing.
//!
//! # Module Structure
//!
//! - `events`: Priority/grant/publication/expiration dates from the event timeline
//! - `citations`: Forward and backward citation tables
//! - `classifications`: Leaf classification codes
//! - `sections`: Abstract, description and claims text

pub mod citations;
pub mod classifications;
pub mod events;
pub mod sections;

pub use citations::{extract_citations, parse_citation};
pub use classifications::extract_classifications;
pub use events::{resolve_event_dates, EventDates};
pub use sections::{extract_abstract, extract_claims, extract_description, ABSTRACT_NOT_FOUND};
