//! # speculatores
//!
//! Scouts out the most recent entries of the Arch Linux news page and
//! presents them in an easily readable form before a `pacman -Syu` decision.
//!
//! ## Usage
//!
//! ```sh
//! speculatores
//! 0) 2025-06-21 https://www.archlinux.org/news/valkey-to-replace-redis-in-the-extra-repository/
//! 1) 2025-06-15 https://www.archlinux.org/news/plasma-640-will-need-manual-intervention/
//! ...
//! Select by # for more info, <CR> or ^C to cancel
//! > 1
//! ```
//!
//! ## Architecture
//!
//! A single linear pipeline, each step awaited before the next:
//! 1. **Fetch**: one GET of `{base}/news`
//! 2. **Parse**: the first five rows of the listing table
//! 3. **Present**: a numbered listing on stdout
//! 4. **Select**: one line from stdin, opened in a text-mode browser

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod models;
mod outputs;
mod prompt;
mod scrapers;
mod utils;
mod viewer;

use cli::Cli;
use outputs::{json, listing};
use scrapers::arch;
use viewer::TerminalViewer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // stdout carries the listing, so logs go to stderr and stay quiet by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // ---- Fetch & parse ----
    let client = arch::http_client()?;
    let entries = arch::index_entries(&client, &args.base_url).await?;
    if entries.is_empty() {
        warn!(base_url = %args.base_url, "News listing has no entries");
    }

    // ---- Present ----
    if args.json {
        println!("{}", json::render_entries(&entries, &args.base_url)?);
        return Ok(());
    }
    print!("{}", listing::render_listing(&entries, &args.base_url));

    // ---- Select ----
    if args.is_interactive() {
        let line = prompt::read_selection(prompt::PROMPT).await?;
        let viewer = TerminalViewer::new(&args.viewer);
        prompt::open_selection(&entries, &args.base_url, line.as_deref(), &viewer).await?;
    }

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
