//! End-to-end pipeline tests over real files.
//!
//! These tests exercise the full path-based flow: allow-list and feed
//! on disk, mock fetcher/extractor at the trait seams, output read
//! back from disk.

use std::fs;

use hazard_extraction::{
    process_feed, FeedColumns, FeedError, MockFetcher, MockTextExtractor,
};

const FEED_HEADER: &str = "# Artikelnummer;energy-label-data-sheet-url1\n";
const ALLOW_HEADER: &str = "# Artikelnummer,Name\n";

#[tokio::test]
async fn test_full_run_writes_codes_for_allowed_articles() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = dir.path().join("feed.csv");
    let allow_path = dir.path().join("allow.csv");
    let out_path = dir.path().join("out.csv");

    fs::write(&allow_path, format!("{ALLOW_HEADER}A1,Widget\n")).unwrap();
    fs::write(
        &feed_path,
        format!(
            "{FEED_HEADER}A1;https://example.com/a1.pdf\nA2;https://example.com/a2.pdf\n"
        ),
    )
    .unwrap();

    let fetcher = MockFetcher::new().with_document(
        "https://example.com/a1.pdf",
        "...H315 and H315A and CH400...".as_bytes(),
    );
    let extractor = MockTextExtractor::new();

    let stats = process_feed(
        &feed_path,
        &allow_path,
        &out_path,
        &FeedColumns::default(),
        &fetcher,
        &extractor,
    )
    .await
    .unwrap();

    assert!(stats.is_consistent());
    assert_eq!(stats.total_rows, 2);
    assert_eq!(stats.processed, 1);
    assert_eq!(stats.skipped_not_in_list, 1);

    let output = fs::read_to_string(&out_path).unwrap();
    assert_eq!(output, "Artikelnummer;H-Codes\nA1;H315,H315A\n");

    // Only the allowed article's URL was ever requested.
    assert_eq!(fetcher.calls(), vec!["https://example.com/a1.pdf".to_string()]);
}

#[tokio::test]
async fn test_failed_fetch_is_recorded_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = dir.path().join("feed.csv");
    let allow_path = dir.path().join("allow.csv");
    let out_path = dir.path().join("out.csv");

    fs::write(&allow_path, format!("{ALLOW_HEADER}A1,Widget\nA2,Gadget\n")).unwrap();
    fs::write(
        &feed_path,
        format!(
            "{FEED_HEADER}A1;https://example.com/down.pdf\nA2;https://example.com/a2.pdf\n"
        ),
    )
    .unwrap();

    let fetcher = MockFetcher::new()
        .with_failure("https://example.com/down.pdf", "connection reset")
        .with_document("https://example.com/a2.pdf", "Safety: H226.".as_bytes());
    let extractor = MockTextExtractor::new();

    let stats = process_feed(
        &feed_path,
        &allow_path,
        &out_path,
        &FeedColumns::default(),
        &fetcher,
        &extractor,
    )
    .await
    .unwrap();

    assert_eq!(stats.processed, 2);
    assert!(stats.is_consistent());

    let output = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Artikelnummer;H-Codes");
    assert!(lines[1].starts_with("A1;error: "));
    assert!(lines[1].contains("connection reset"));
    assert_eq!(lines[2], "A2;H226");
}

#[tokio::test]
async fn test_allowed_article_with_empty_url_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = dir.path().join("feed.csv");
    let allow_path = dir.path().join("allow.csv");
    let out_path = dir.path().join("out.csv");

    fs::write(&allow_path, format!("{ALLOW_HEADER}A1,Widget\n")).unwrap();
    fs::write(&feed_path, format!("{FEED_HEADER}A1;\n")).unwrap();

    let fetcher = MockFetcher::new();
    let extractor = MockTextExtractor::new();

    let stats = process_feed(
        &feed_path,
        &allow_path,
        &out_path,
        &FeedColumns::default(),
        &fetcher,
        &extractor,
    )
    .await
    .unwrap();

    assert_eq!(stats.skipped_no_url, 1);
    assert_eq!(stats.processed, 0);
    assert_eq!(fetcher.call_count(), 0);

    let output = fs::read_to_string(&out_path).unwrap();
    assert_eq!(output, "Artikelnummer;H-Codes\n");
}

#[tokio::test]
async fn test_missing_feed_file_aborts_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let allow_path = dir.path().join("allow.csv");
    let out_path = dir.path().join("out.csv");

    fs::write(&allow_path, format!("{ALLOW_HEADER}A1,Widget\n")).unwrap();

    let fetcher = MockFetcher::new();
    let extractor = MockTextExtractor::new();

    let err = process_feed(
        &dir.path().join("does-not-exist.csv"),
        &allow_path,
        &out_path,
        &FeedColumns::default(),
        &fetcher,
        &extractor,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, FeedError::InputNotFound { .. }));
    assert_eq!(fetcher.call_count(), 0);
    assert!(!out_path.exists());
}

#[tokio::test]
async fn test_missing_allow_list_file_aborts_before_processing() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = dir.path().join("feed.csv");
    let out_path = dir.path().join("out.csv");

    fs::write(
        &feed_path,
        format!("{FEED_HEADER}A1;https://example.com/a1.pdf\n"),
    )
    .unwrap();

    let fetcher = MockFetcher::new();
    let extractor = MockTextExtractor::new();

    let err = process_feed(
        &feed_path,
        &dir.path().join("does-not-exist.csv"),
        &out_path,
        &FeedColumns::default(),
        &fetcher,
        &extractor,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, FeedError::InputNotFound { .. }));
    assert_eq!(fetcher.call_count(), 0);
}

#[tokio::test]
async fn test_datasheet_without_text_reports_none() {
    let dir = tempfile::tempdir().unwrap();
    let feed_path = dir.path().join("feed.csv");
    let allow_path = dir.path().join("allow.csv");
    let out_path = dir.path().join("out.csv");

    fs::write(&allow_path, format!("{ALLOW_HEADER}A1,Widget\n")).unwrap();
    fs::write(
        &feed_path,
        format!("{FEED_HEADER}A1;https://example.com/scanned.pdf\n"),
    )
    .unwrap();

    // A scanned, image-only datasheet extracts to an empty string.
    let fetcher =
        MockFetcher::new().with_document("https://example.com/scanned.pdf", "".as_bytes());
    let extractor = MockTextExtractor::new();

    let stats = process_feed(
        &feed_path,
        &allow_path,
        &out_path,
        &FeedColumns::default(),
        &fetcher,
        &extractor,
    )
    .await
    .unwrap();

    assert_eq!(stats.processed, 1);

    let output = fs::read_to_string(&out_path).unwrap();
    assert_eq!(output, "Artikelnummer;H-Codes\nA1;none\n");
}
