//! Feed processing: filter, fetch, extract, scan, write.

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::allowlist::AllowList;
use crate::error::{FeedError, FeedResult};
use crate::scanner::HazardCodeScanner;
use crate::traits::{DocumentFetcher, TextExtractor};
use crate::types::{ExtractionOutcome, FeedColumns, RunStats};

/// Header row of the output file.
const OUTPUT_HEADER: [&str; 2] = ["Artikelnummer", "H-Codes"];

/// Process a product feed end to end.
///
/// Loads the allow-list, streams the semicolon-delimited feed and
/// writes one `Artikelnummer;H-Codes` record per processed row to
/// `output_path`. Per-row fetch or extraction failures are recorded in
/// the output and never abort the run; only unopenable inputs or a
/// feed without a header row are fatal.
pub async fn process_feed<F, X>(
    feed_path: &Path,
    allow_list_path: &Path,
    output_path: &Path,
    columns: &FeedColumns,
    fetcher: &F,
    extractor: &X,
) -> FeedResult<RunStats>
where
    F: DocumentFetcher + ?Sized,
    X: TextExtractor + ?Sized,
{
    let allow_list = AllowList::load(allow_list_path)?;

    let feed = File::open(feed_path).map_err(|source| FeedError::InputNotFound {
        path: feed_path.display().to_string(),
        source,
    })?;
    let output = File::create(output_path)?;

    process_rows(
        feed,
        &feed_path.display().to_string(),
        &allow_list,
        output,
        columns,
        fetcher,
        extractor,
    )
    .await
}

/// Process feed rows from any reader, writing records to any writer.
///
/// The row-level state machine behind [`process_feed`], split out so
/// tests can run against in-memory buffers. Rows are handled strictly
/// in encounter order, one fully resolved before the next begins.
pub async fn process_rows<R, W, F, X>(
    feed: R,
    feed_label: &str,
    allow_list: &AllowList,
    output: W,
    columns: &FeedColumns,
    fetcher: &F,
    extractor: &X,
) -> FeedResult<RunStats>
where
    R: Read,
    W: Write,
    F: DocumentFetcher + ?Sized,
    X: TextExtractor + ?Sized,
{
    // Flexible: short rows read as absent fields, not as errors.
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .trim(Trim::All)
        .flexible(true)
        .from_reader(feed);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(FeedError::MissingHeader {
            path: feed_label.to_string(),
        });
    }

    // Missing columns resolve to None; their fields read as empty.
    let article_idx = headers.iter().position(|h| h == columns.article);
    let url_idx = headers.iter().position(|h| h == columns.datasheet_url);

    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(output);
    writer.write_record(OUTPUT_HEADER)?;

    let scanner = HazardCodeScanner::new();
    let mut stats = RunStats::new();

    for record in reader.records() {
        let record = record?;
        stats.total_rows += 1;

        let article = field(&record, article_idx);
        let url = field(&record, url_idx);

        if article.is_empty() || url.is_empty() {
            stats.skipped_no_url += 1;
            continue;
        }

        if !allow_list.contains(article) {
            stats.skipped_not_in_list += 1;
            continue;
        }

        stats.processed += 1;
        info!(
            article = %article,
            processed = stats.processed,
            eligible = allow_list.len(),
            "Processing article"
        );

        let outcome = extract_codes(url, fetcher, extractor, &scanner).await;
        if let ExtractionOutcome::Failed(reason) = &outcome {
            warn!(article = %article, url = %url, reason = %reason, "Extraction failed");
        }

        let serialized = outcome.to_string();
        writer.write_record([article, serialized.as_str()])?;
    }

    writer.flush()?;

    info!(
        total_rows = stats.total_rows,
        skipped_no_url = stats.skipped_no_url,
        skipped_not_in_list = stats.skipped_not_in_list,
        processed = stats.processed,
        "Feed processing complete"
    );

    Ok(stats)
}

/// Read a field by optional column index, trimmed; absent is empty.
fn field<'r>(record: &'r StringRecord, idx: Option<usize>) -> &'r str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

/// Resolve one datasheet: fetch → extract → scan.
///
/// Stage failures map to `Failed`; scanning cannot fail, and empty
/// extracted text scans to `NoCodesFound`.
async fn extract_codes<F, X>(
    url: &str,
    fetcher: &F,
    extractor: &X,
    scanner: &HazardCodeScanner,
) -> ExtractionOutcome
where
    F: DocumentFetcher + ?Sized,
    X: TextExtractor + ?Sized,
{
    let bytes = match fetcher.fetch(url).await {
        Ok(bytes) => bytes,
        Err(e) => return ExtractionOutcome::Failed(e.to_string()),
    };

    let text = match extractor.extract_text(&bytes) {
        Ok(text) => text,
        Err(e) => return ExtractionOutcome::Failed(e.to_string()),
    };

    ExtractionOutcome::from_codes(scanner.scan(&text))
}
