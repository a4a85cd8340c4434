//! Extractor trait for pluggable document-to-text conversion.

use crate::error::ExtractResult;

/// Extracts plain text from raw document bytes.
///
/// Implementations concatenate per-page text in page order. A page
/// without a text layer is skipped, not an error; a document whose
/// pages all yield nothing returns an empty string. Only a
/// structurally corrupt or unsupported document fails.
pub trait TextExtractor: Send + Sync {
    /// Extract the concatenated page text from `bytes`.
    fn extract_text(&self, bytes: &[u8]) -> ExtractResult<String>;

    /// Get the extractor name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
