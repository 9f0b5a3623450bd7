//! Batch scraping over a pluggable page source.
//!
//! [`PatentScraper`] keeps an ordered list of identifiers, asks a
//! [`PageSource`] for each page, and extracts a record from every page that
//! arrived. How pages are fetched (plain HTTP, a headless browser, a local
//! cache) is entirely up to the page source, including any concurrency,
//! retries or rate limiting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::PatentRecord;

/// A page delivered by a [`PageSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    /// Page HTML.
    pub html: String,
    /// URL the page was finally served from, after any redirects.
    pub final_url: String,
}

/// Fetch collaborator: turns an identifier into a patent page.
///
/// Any `Fn(&str) -> Result<FetchedPage>` closure is a page source.
pub trait PageSource {
    /// Fetch the detail page for `identifier`.
    fn fetch(&self, identifier: &str) -> Result<FetchedPage>;
}

impl<F> PageSource for F
where
    F: Fn(&str) -> Result<FetchedPage>,
{
    fn fetch(&self, identifier: &str) -> Result<FetchedPage> {
        self(identifier)
    }
}

/// Outcome of scraping one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrapeStatus {
    Success,
    Failed(String),
}

impl ScrapeStatus {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Counts from one [`PatentScraper::scrape_all`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Scrapes a list of patents with shared extraction options.
#[derive(Debug, Clone, Default)]
pub struct PatentScraper {
    options: Options,
    patents: Vec<String>,
    status: BTreeMap<String, ScrapeStatus>,
    records: BTreeMap<String, PatentRecord>,
}

impl PatentScraper {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Queue an identifier. Blank identifiers are rejected.
    pub fn add_patent(&mut self, identifier: impl Into<String>) -> Result<()> {
        let identifier = identifier.into();
        if identifier.trim().is_empty() {
            return Err(Error::InvalidIdentifier(identifier));
        }
        self.patents.push(identifier);
        Ok(())
    }

    /// Remove the first queued occurrence of `identifier`.
    ///
    /// Returns `false` if it was not queued.
    pub fn remove_patent(&mut self, identifier: &str) -> bool {
        match self.patents.iter().position(|p| p == identifier) {
            Some(index) => {
                self.patents.remove(index);
                true
            }
            None => {
                tracing::debug!(identifier, "patent not in list");
                false
            }
        }
    }

    /// Queued identifiers in insertion order.
    #[must_use]
    pub fn patents(&self) -> &[String] {
        &self.patents
    }

    /// Status of every identifier scraped so far.
    #[must_use]
    pub const fn status(&self) -> &BTreeMap<String, ScrapeStatus> {
        &self.status
    }

    /// Records of every identifier scraped successfully so far.
    #[must_use]
    pub const fn records(&self) -> &BTreeMap<String, PatentRecord> {
        &self.records
    }

    #[must_use]
    pub fn record(&self, identifier: &str) -> Option<&PatentRecord> {
        self.records.get(identifier)
    }

    /// Fetch and extract one identifier without touching the queue.
    pub fn scrape_one(&self, identifier: &str, source: &dyn PageSource) -> Result<PatentRecord> {
        let page = source.fetch(identifier)?;
        crate::extract_html(&page.html, identifier, &page.final_url, &self.options)
    }

    /// Scrape every queued identifier in order.
    ///
    /// A failing identifier is recorded as [`ScrapeStatus::Failed`] and does
    /// not stop the run. Fails with [`Error::NoPatents`] if nothing is queued.
    pub fn scrape_all(&mut self, source: &dyn PageSource) -> Result<BatchSummary> {
        if self.patents.is_empty() {
            return Err(Error::NoPatents);
        }

        let mut summary = BatchSummary::default();
        for identifier in self.patents.clone() {
            tracing::info!(identifier = %identifier, "scraping patent");

            match self.scrape_one(&identifier, source) {
                Ok(record) => {
                    summary.succeeded += 1;
                    self.records.insert(identifier.clone(), record);
                    self.status.insert(identifier, ScrapeStatus::Success);
                }
                Err(err) => {
                    tracing::warn!(identifier = %identifier, error = %err, "scrape failed");
                    summary.failed += 1;
                    self.records.remove(&identifier);
                    self.status.insert(identifier, ScrapeStatus::Failed(err.to_string()));
                }
            }
        }

        Ok(summary)
    }
}
