//! Arch Linux news listing scraper.
//!
//! The listing at `{base}/news` is a plain table:
//!
//! ```text
//! tbody > tr > td[date], td[title > a[href]], td[author]
//! ```
//!
//! Only the first few rows are of interest before an upgrade, so parsing stops
//! after [`MAX_ENTRIES`] rows.

use crate::models::{Listing, NewsEntry};
use crate::utils::truncate_for_log;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};

/// Rows past this count are ignored.
pub const MAX_ENTRIES: usize = 5;

/// Build the HTTP client used for the listing fetch.
pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// URL of the news listing for a base URL.
pub fn news_url(base_url: &str) -> String {
    format!("{base_url}/news")
}

/// Fetch the news listing page and return its markup.
///
/// # Errors
///
/// Any transport failure or non-2xx final status (an unfollowed 3xx
/// included) is returned as an error; there is no retry.
#[instrument(level = "info", skip(client))]
pub async fn fetch_listing_html(client: &Client, base_url: &str) -> Result<String, Box<dyn Error>> {
    let url = news_url(base_url);
    let response = client.get(&url).send().await?;
    let status = response.status();
    debug!(%status, %url, "News listing responded");
    if !status.is_success() {
        return Err(format!("{url} responded with {status}").into());
    }

    let html = response.text().await?;
    info!(bytes = html.len(), %url, "Fetched news listing");
    Ok(html)
}

/// Parse at most `limit` rows of the first table body into entries.
///
/// # Errors
///
/// Fails when the document has no `tbody`, or when any processed row does not
/// have exactly three cells with a linked title. A single bad row fails the
/// whole listing.
pub fn parse_listing(html: &str, limit: usize) -> Result<Vec<NewsEntry>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let tbody_selector = Selector::parse("tbody")?;
    let anchor_selector = Selector::parse("a")?;

    let tbody = document
        .select(&tbody_selector)
        .next()
        .ok_or("news listing has no table body")?;

    let rows = tbody
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "tr");

    let mut entries = Vec::new();
    for (index, row) in rows.take(limit).enumerate() {
        entries.push(parse_row(index, row, &anchor_selector)?);
    }
    Ok(entries)
}

fn parse_row(
    index: usize,
    row: ElementRef<'_>,
    anchor_selector: &Selector,
) -> Result<NewsEntry, Box<dyn Error>> {
    let cells: Vec<ElementRef<'_>> = row
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .collect();

    let [date, title, _author] = cells.as_slice() else {
        return Err(format!("row {index}: expected 3 cells, found {}", cells.len()).into());
    };

    let anchor = title
        .select(anchor_selector)
        .next()
        .ok_or_else(|| format!("row {index}: title cell has no link"))?;
    let href = anchor
        .value()
        .attr("href")
        .ok_or_else(|| format!("row {index}: title link has no href"))?;

    Ok(NewsEntry {
        index,
        date: cell_text(date),
        title: cell_text(title),
        relative_link: href.to_string(),
    })
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Fetch and parse the listing for `base_url`.
#[instrument(level = "info", skip(client))]
pub async fn index_entries(client: &Client, base_url: &str) -> Result<Listing, Box<dyn Error>> {
    let html = fetch_listing_html(client, base_url).await?;
    let entries = parse_listing(&html, MAX_ENTRIES).inspect_err(|e| {
        debug!(
            error = %e,
            body_preview = %truncate_for_log(&html, 300),
            "News listing did not match the expected table layout"
        );
    })?;

    info!(count = entries.len(), source = %news_url(base_url), "Indexed news entries");
    debug!(entries = ?entries, "Arch news entries");
    Ok(Listing::from_entries(entries))
}
