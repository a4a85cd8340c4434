//! Command-line entry point for hazard-code extraction.
//!
//! Reads a product feed and an allow-list, fetches each eligible
//! article's datasheet and writes one `Artikelnummer;H-Codes` row per
//! processed article. All diagnostics go to stderr; verbosity is
//! controlled with `RUST_LOG` (default `info`).

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hazard_extraction::{process_feed, FeedColumns, HttpFetcher, PdfTextExtractor};

#[derive(Parser)]
#[command(
    name = "hazard-extract",
    about = "Extract hazard statement codes (H-codes) from datasheets in a product feed"
)]
struct Args {
    /// Semicolon-delimited product feed
    feed: PathBuf,

    /// Comma-delimited allow-list of article numbers
    allow_list: PathBuf,

    /// Output file (semicolon-delimited)
    output: PathBuf,

    /// Per-request timeout for datasheet downloads, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// User agent sent with datasheet downloads
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics belong on stderr; the output file is the only
    // primary output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut fetcher = HttpFetcher::with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(user_agent) = args.user_agent {
        fetcher = fetcher.with_user_agent(user_agent);
    }
    let extractor = PdfTextExtractor::new();

    let stats = process_feed(
        &args.feed,
        &args.allow_list,
        &args.output,
        &FeedColumns::default(),
        &fetcher,
        &extractor,
    )
    .await?;

    info!(
        total_rows = stats.total_rows,
        processed = stats.processed,
        output = %args.output.display(),
        "Output written"
    );

    Ok(())
}
