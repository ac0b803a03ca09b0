//! Presentation of a parsed [`Listing`](crate::models::Listing).
//!
//! # Submodules
//!
//! - [`listing`]: the numbered console listing shown before the prompt
//! - [`json`]: a JSON array of entries for scripting (`--json`)
//!
//! # Output Shape
//!
//! ```text
//! 0) 2025-06-21 https://www.archlinux.org/news/valkey-to-replace-redis-in-the-extra-repository/
//! 1) 2025-06-15 https://www.archlinux.org/news/plasma-640-will-need-manual-intervention/
//! ```

pub mod json;
pub mod listing;
