//! PDF text extraction backed by `lopdf`.

use lopdf::Document;
use tracing::debug;

use crate::error::{ExtractError, ExtractResult};
use crate::traits::extractor::TextExtractor;

/// Extracts the text layer of a PDF document.
///
/// Per-page text is concatenated in page order, joined by a newline.
/// Pages without a text layer (scanned or image-only) are skipped; a
/// document where every page is like that yields an empty string, the
/// same as a datasheet whose text simply contains nothing of interest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> ExtractResult<String> {
        let document =
            Document::load_mem(bytes).map_err(|e| ExtractError::Malformed(e.to_string()))?;

        let pages = document.get_pages();
        let mut page_texts: Vec<String> = Vec::new();

        for page_number in pages.keys() {
            match document.extract_text(&[*page_number]) {
                Ok(text) if !text.trim().is_empty() => page_texts.push(text),
                // No text layer on this page, or the page is unreadable.
                _ => {}
            }
        }

        debug!(
            total_pages = pages.len(),
            pages_with_text = page_texts.len(),
            "PDF text extracted"
        );

        Ok(page_texts.join("\n"))
    }

    fn name(&self) -> &str {
        "pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let extractor = PdfTextExtractor::new();

        let err = extractor.extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let extractor = PdfTextExtractor::new();

        let err = extractor.extract_text(b"").unwrap_err();
        assert!(matches!(err, ExtractError::Malformed(_)));
    }
}
