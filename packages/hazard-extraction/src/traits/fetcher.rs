//! Fetcher trait for pluggable document retrieval.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Retrieves raw document bytes from a URL.
///
/// One call is one bounded attempt: no retries, no caching, each call
/// independent and stateless. Every failure mode comes back as a
/// `FetchError` instead of propagating past the caller.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the document at `url` and return its raw bytes.
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
