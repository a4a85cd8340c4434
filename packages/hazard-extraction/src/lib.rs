//! Hazard Statement Code Extraction Library
//!
//! Streams a semicolon-delimited product feed, filters rows against an
//! allow-list of product identifiers, retrieves each eligible row's
//! datasheet, extracts the document's text layer and scans it for
//! hazard statement codes ("H-codes", e.g. `H314`, `H412`). One output
//! record is written per processed product; per-row fetch or parse
//! failures are recorded in the output and never abort the batch.
//!
//! # Design Philosophy
//!
//! - Strictly sequential: one row fully resolved before the next
//! - Failures are data: every stage returns a typed result, the
//!   pipeline turns per-row errors into `error:` output fields
//! - External capabilities behind traits: retrieval and text
//!   extraction are pluggable and mockable
//!
//! # Usage
//!
//! ```rust,ignore
//! use hazard_extraction::{process_feed, FeedColumns, HttpFetcher, PdfTextExtractor};
//!
//! let fetcher = HttpFetcher::new();
//! let extractor = PdfTextExtractor::new();
//! let stats = process_feed(
//!     feed_path,
//!     allow_list_path,
//!     output_path,
//!     &FeedColumns::default(),
//!     &fetcher,
//!     &extractor,
//! )
//! .await?;
//! assert!(stats.is_consistent());
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Trait seams for document retrieval and text extraction
//! - [`fetchers`] - Fetcher implementations (HTTP, mock)
//! - [`extractors`] - Extractor implementations (PDF, mock)
//! - [`scanner`] - The hazard-code pattern scanner
//! - [`allowlist`] - Allow-list loading
//! - [`pipeline`] - Feed processing orchestration
//! - [`types`] - Outcome, statistics and configuration types

pub mod allowlist;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod pipeline;
pub mod scanner;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use allowlist::{AllowList, ARTICLE_COLUMN};
pub use error::{ExtractError, FeedError, FetchError};
pub use scanner::HazardCodeScanner;
pub use traits::{DocumentFetcher, TextExtractor};
pub use types::{
    config::{FeedColumns, DATASHEET_URL_COLUMN},
    outcome::ExtractionOutcome,
    stats::RunStats,
};

// Re-export pipeline entry points
pub use pipeline::{process_feed, process_rows};

// Re-export implementations
pub use extractors::{MockTextExtractor, PdfTextExtractor};
pub use fetchers::{HttpFetcher, MockFetcher};
