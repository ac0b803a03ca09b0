//! JSON output of the parsed entries.
//!
//! Each element carries the scan-order index, the date, the title, the
//! relative link and the resolved absolute link:
//!
//! ```text
//! [
//!   {
//!     "index": 0,
//!     "date": "2025-06-21",
//!     "title": "Valkey to replace Redis in the [extra] Repository",
//!     "relative_link": "/news/valkey-to-replace-redis-in-the-extra-repository/",
//!     "url": "https://www.archlinux.org/news/valkey-to-replace-redis-in-the-extra-repository/"
//!   }
//! ]
//! ```

use crate::models::{Listing, NewsEntry};
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    entry: &'a NewsEntry,
    url: String,
}

/// Serialize the listing as a pretty-printed JSON array.
#[instrument(level = "debug", skip(listing), fields(count = listing.len()))]
pub fn render_entries(listing: &Listing, base_url: &str) -> Result<String, serde_json::Error> {
    let rows: Vec<JsonEntry<'_>> = listing
        .entries()
        .map(|entry| JsonEntry {
            entry,
            url: entry.absolute_link(base_url),
        })
        .collect();

    let json = serde_json::to_string_pretty(&rows)?;
    debug!(bytes = json.len(), "Rendered JSON listing");
    Ok(json)
}
