//! Configuration options for record extraction.
//!
//! The large text blocks of a patent page (abstract, description, claims)
//! are only extracted when asked for. Everything else is always extracted.

use serde::{Deserialize, Serialize};

/// Configuration options for record extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the bibliographic-only record.
///
/// # Example
///
/// ```rust
/// use rs_patent_scraper::Options;
///
/// // Bibliographic data only
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     include_claims: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Extract the abstract.
    ///
    /// When enabled and the page has no abstract, the record carries
    /// [`crate::ABSTRACT_NOT_FOUND`] instead of an empty string.
    ///
    /// Default: `false`
    pub include_abstract: bool,

    /// Extract the full description section.
    ///
    /// Default: `false`
    pub include_description: bool,

    /// Extract the claims section.
    ///
    /// Default: `false`
    pub include_claims: bool,
}

impl Options {
    /// Options with every text block enabled.
    #[must_use]
    pub const fn full_text() -> Self {
        Self {
            include_abstract: true,
            include_description: true,
            include_claims: true,
        }
    }
}
