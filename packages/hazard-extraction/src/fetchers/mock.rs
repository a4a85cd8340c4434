//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the `DocumentFetcher`
//! trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::DocumentFetcher;

/// Mock fetcher for testing.
///
/// Allows configuring canned document bytes or failures per URL, and
/// records every requested URL for verification.
///
/// # Example
///
/// ```rust,ignore
/// use hazard_extraction::fetchers::MockFetcher;
///
/// let fetcher = MockFetcher::new()
///     .with_document("https://example.com/a1.pdf", b"%PDF...".to_vec())
///     .with_failure("https://example.com/a2.pdf", "connection refused");
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// Canned document bytes indexed by URL
    documents: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    /// Canned failure reasons indexed by URL
    failures: Arc<RwLock<HashMap<String, String>>>,
    /// Track requested URLs for verification
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register canned bytes for a URL (builder pattern).
    pub fn with_document(self, url: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.documents
            .write()
            .unwrap()
            .insert(url.to_string(), bytes.into());
        self
    }

    /// Register a failure for a URL (builder pattern).
    pub fn with_failure(self, url: &str, reason: &str) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(url.to_string(), reason.to_string());
        self
    }

    /// Get the number of fetch calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the URLs that were requested, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            documents: Arc::clone(&self.documents),
            failures: Arc::clone(&self.failures),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl DocumentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        // Record the call
        self.calls.write().unwrap().push(url.to_string());

        if let Some(reason) = self.failures.read().unwrap().get(url) {
            return Err(FetchError::Transport(reason.clone().into()));
        }

        self.documents
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
