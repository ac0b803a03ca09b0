//! Selection prompt.
//!
//! The operator gets one line to pick an entry by index. An empty line, end of
//! input, or Ctrl-C all cancel without side effects.

use crate::models::Listing;
use crate::viewer::Viewer;
use std::error::Error;
use std::io::{self, BufRead, BufReader, Write};
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

pub const PROMPT: &str = "Select by # for more info, <CR> or ^C to cancel\n> ";

/// What the operator asked for at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    /// Empty line or end of input.
    Cancel,
    /// An integer. `None` when it is negative or too large to be any entry's
    /// index.
    Index(Option<usize>),
}

/// Print `prompt` and read one line from stdin, giving up on Ctrl-C.
pub async fn read_selection(prompt: &str) -> Result<Option<String>, Box<dyn Error>> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    read_selection_from(BufReader::new(io::stdin()), tokio::signal::ctrl_c()).await
}

/// Read one line from `reader` unless `cancel` resolves first.
///
/// Returns `None` on end of input or on cancellation. The reader runs on a
/// detached thread so that a cancelled read does not hold up runtime
/// shutdown.
pub async fn read_selection_from<R, C>(reader: R, cancel: C) -> Result<Option<String>, Box<dyn Error>>
where
    R: BufRead + Send + 'static,
    C: Future<Output = io::Result<()>>,
{
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let mut reader = reader;
        let mut line = String::new();
        let res = reader
            .read_line(&mut line)
            .map(|n| (n > 0).then_some(line));
        let _ = tx.send(res);
    });

    tokio::select! {
        biased;
        sig = cancel => {
            sig?;
            println!();
            info!("Interrupted at prompt");
            Ok(None)
        }
        res = rx => Ok(res??),
    }
}

/// Interpret a raw input line.
///
/// The line terminator is dropped and a line that is then empty cancels.
/// Anything else must be an optionally signed run of ASCII digits, surrounding
/// whitespace allowed.
pub fn parse_selection(line: Option<&str>) -> Result<Selection, Box<dyn Error>> {
    let Some(line) = line.map(|l| l.trim_end_matches(['\r', '\n'])) else {
        return Ok(Selection::Cancel);
    };
    if line.is_empty() {
        return Ok(Selection::Cancel);
    }

    let text = line.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("selection `{text}` is not an integer").into());
    }

    // All digits, so parsing only fails on overflow.
    let index = digits.parse::<usize>().ok().filter(|&n| !negative || n == 0);
    Ok(Selection::Index(index))
}

/// Resolve the operator's input against the listing and open the entry.
///
/// Returns the absolute URL handed to the viewer, or `None` when nothing was
/// opened (cancelled, or an integer with no entry).
///
/// # Errors
///
/// Non-integer input and viewer failures are returned.
#[instrument(level = "info", skip(listing, viewer))]
pub async fn open_selection<V: Viewer>(
    listing: &Listing,
    base_url: &str,
    line: Option<&str>,
    viewer: &V,
) -> Result<Option<String>, Box<dyn Error>> {
    let index = match parse_selection(line)? {
        Selection::Cancel => {
            debug!("No selection made");
            return Ok(None);
        }
        Selection::Index(index) => index,
    };

    let Some(entry) = index.and_then(|i| listing.entry(i)) else {
        warn!(?index, available = listing.len(), "No entry at selected index");
        return Ok(None);
    };

    let url = entry.absolute_link(base_url);
    info!(index = entry.index, %url, "Opening entry");
    viewer.open(&url).await?;
    Ok(Some(url))
}
