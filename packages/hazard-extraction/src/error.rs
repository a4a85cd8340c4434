//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to keep each
//! stage's failure modes visible in its contract. Feed errors are
//! fatal and abort a run; fetch and extract errors are captured per
//! row and never interrupt iteration.

use thiserror::Error;

/// Fatal errors that abort a processing run.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Input file could not be opened
    #[error("input not found: {path}")]
    InputNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Tabular input has no header row at all
    #[error("missing header row: {path}")]
    MissingHeader { path: String },

    /// Malformed tabular input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Read/write failure on an open handle
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-document retrieval failures, recorded per row.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Request exceeded the bounded wait
    #[error("timeout fetching {url}")]
    Timeout { url: String },

    /// Connection, TLS or body transfer failure
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Per-document parsing failures, recorded per row.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Document is structurally corrupt or not a supported format
    #[error("malformed document: {0}")]
    Malformed(String),
}

/// Result type alias for run-level operations.
pub type FeedResult<T> = std::result::Result<T, FeedError>;

/// Result type alias for document retrieval.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for text extraction.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
