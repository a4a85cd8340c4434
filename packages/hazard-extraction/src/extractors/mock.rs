//! Mock extractor for testing.

use crate::error::{ExtractError, ExtractResult};
use crate::traits::extractor::TextExtractor;

/// Mock extractor that decodes document bytes as UTF-8 text.
///
/// Lets tests route plain text through the pipeline without building
/// real PDF fixtures. Can be configured to fail every call instead.
#[derive(Debug, Clone, Default)]
pub struct MockTextExtractor {
    failure: Option<String>,
}

impl MockTextExtractor {
    /// Create a passthrough mock extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that fails every extraction with the given reason.
    pub fn with_failure(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
        }
    }
}

impl TextExtractor for MockTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> ExtractResult<String> {
        if let Some(reason) = &self.failure {
            return Err(ExtractError::Malformed(reason.clone()));
        }
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_decodes_bytes() {
        let extractor = MockTextExtractor::new();

        let text = extractor.extract_text(b"Causes burns. H314").unwrap();
        assert_eq!(text, "Causes burns. H314");
    }

    #[test]
    fn test_configured_failure() {
        let extractor = MockTextExtractor::with_failure("unsupported format");

        let err = extractor.extract_text(b"anything").unwrap_err();
        assert!(err.to_string().contains("unsupported format"));
    }
}
