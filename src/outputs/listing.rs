//! Numbered console listing.

use crate::models::Listing;

/// Render one line per entry in ascending index order:
/// `"{index}) {date} {base}{relative_link}"`.
pub fn render_listing(listing: &Listing, base_url: &str) -> String {
    listing
        .entries()
        .map(|e| format!("{}) {} {}\n", e.index, e.date, e.absolute_link(base_url)))
        .collect()
}
