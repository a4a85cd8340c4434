//! Fetcher implementations.
//!
//! Concrete implementations of the `DocumentFetcher` trait:
//!
//! - `HttpFetcher` - single-attempt HTTP retrieval with a bounded timeout
//! - `MockFetcher` - canned responses for testing

mod http;
mod mock;

pub use http::{HttpFetcher, DEFAULT_TIMEOUT_SECS};
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::DocumentFetcher;
