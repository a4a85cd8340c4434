//! Pipeline configuration.

use crate::allowlist::ARTICLE_COLUMN;

/// Default header of the feed column holding the datasheet URL.
pub const DATASHEET_URL_COLUMN: &str = "energy-label-data-sheet-url1";

/// Column names consumed from the product feed.
///
/// Absent columns are read as empty fields, never as an error; rows
/// then fall into the missing-identifier/URL skip bucket.
#[derive(Debug, Clone)]
pub struct FeedColumns {
    /// Product identifier column.
    pub article: String,
    /// Datasheet URL column.
    pub datasheet_url: String,
}

impl Default for FeedColumns {
    fn default() -> Self {
        Self {
            article: ARTICLE_COLUMN.to_string(),
            datasheet_url: DATASHEET_URL_COLUMN.to_string(),
        }
    }
}

impl FeedColumns {
    /// Create a config with the default column names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the identifier column.
    pub fn with_article(mut self, name: impl Into<String>) -> Self {
        self.article = name.into();
        self
    }

    /// Override the datasheet URL column.
    pub fn with_datasheet_url(mut self, name: impl Into<String>) -> Self {
        self.datasheet_url = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_columns() {
        let columns = FeedColumns::default();

        assert_eq!(columns.article, "# Artikelnummer");
        assert_eq!(columns.datasheet_url, "energy-label-data-sheet-url1");
    }

    #[test]
    fn test_builder_overrides() {
        let columns = FeedColumns::new()
            .with_article("sku")
            .with_datasheet_url("sheet-url");

        assert_eq!(columns.article, "sku");
        assert_eq!(columns.datasheet_url, "sheet-url");
    }
}
