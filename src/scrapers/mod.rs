//! News source scrapers.
//!
//! Each scraper follows the same two-phase pattern:
//!
//! 1. **Fetching**: one GET of the listing page, returning raw markup
//! 2. **Parsing**: a single pass over the listing table producing
//!    [`NewsEntry`](crate::models::NewsEntry) values
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Arch Linux news | [`arch`] | HTML scraping | `{base}/news`, first table body |
//!
//! Failures are not recovered: a failed fetch or a malformed row aborts the
//! whole run.

pub mod arch;
