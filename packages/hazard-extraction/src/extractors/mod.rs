//! Extractor implementations.
//!
//! Concrete implementations of the `TextExtractor` trait:
//!
//! - `PdfTextExtractor` - text layer of a PDF, page by page
//! - `MockTextExtractor` - passthrough/failure for testing

mod mock;
mod pdf;

pub use mock::MockTextExtractor;
pub use pdf::PdfTextExtractor;

// Re-export from traits for convenience
pub use crate::traits::extractor::TextExtractor;
