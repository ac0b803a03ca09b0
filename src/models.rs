//! Data models for scouted news entries.
//!
//! - [`NewsEntry`]: one row of the news listing, as parsed
//! - [`Listing`]: the entries of a single run, keyed by index for the
//!   selection prompt

use serde::Serialize;
use std::collections::BTreeMap;

/// A single row of the news listing.
///
/// Entries are created by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsEntry {
    /// Scan-order position in the listing, starting at 0.
    pub index: usize,
    /// Publication date as shown in the listing.
    pub date: String,
    /// Headline text of the title cell.
    pub title: String,
    /// The `href` of the title anchor, relative to the site.
    pub relative_link: String,
}

impl NewsEntry {
    /// Plain concatenation of the base URL and the relative link.
    pub fn absolute_link(&self, base_url: &str) -> String {
        format!("{}{}", base_url, self.relative_link)
    }
}

/// The entries parsed in one run, keyed by index.
#[derive(Debug, Default)]
pub struct Listing {
    entries: BTreeMap<usize, NewsEntry>,
}

impl Listing {
    pub fn from_entries(entries: Vec<NewsEntry>) -> Self {
        let entries = entries.into_iter().map(|e| (e.index, e)).collect();
        Self { entries }
    }

    /// Entries in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = &NewsEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry stored for `index`.
    pub fn entry(&self, index: usize) -> Option<&NewsEntry> {
        self.entries.get(&index)
    }
}
