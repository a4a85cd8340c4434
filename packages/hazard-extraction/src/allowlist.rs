//! Allow-list loading.
//!
//! The allow-list is the set of product identifiers eligible for
//! processing; every feed row outside it is skipped.

use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::{FeedError, FeedResult};

/// Header of the column holding product identifiers, in both the
/// allow-list and the feed.
pub const ARTICLE_COLUMN: &str = "# Artikelnummer";

/// Deduplicated set of product identifiers eligible for processing.
///
/// Built once per run and immutable thereafter. Membership is a
/// case-sensitive, whitespace-trimmed exact match.
#[derive(Debug, Clone)]
pub struct AllowList {
    ids: HashSet<String>,
}

impl AllowList {
    /// Load from a comma-delimited file with a header row.
    pub fn load(path: &Path) -> FeedResult<Self> {
        let file = File::open(path).map_err(|source| FeedError::InputNotFound {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(file, &path.display().to_string())
    }

    /// Load from any reader producing comma-delimited tabular text.
    ///
    /// Values of the [`ARTICLE_COLUMN`] column are trimmed and
    /// deduplicated; empty values are dropped. A source with no header
    /// row at all is an error, while a header that lacks the target
    /// column only means zero matches and yields an empty set.
    pub fn from_reader<R: Read>(reader: R, source_label: &str) -> FeedResult<Self> {
        // Flexible: short rows read as absent fields, not as errors.
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b',')
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(FeedError::MissingHeader {
                path: source_label.to_string(),
            });
        }

        let mut ids = HashSet::new();
        if let Some(idx) = headers.iter().position(|h| h == ARTICLE_COLUMN) {
            for record in csv_reader.records() {
                let record = record?;
                let id = record.get(idx).unwrap_or("").trim();
                if !id.is_empty() {
                    ids.insert(id.to_string());
                }
            }
        }

        let sample: Vec<&String> = ids.iter().take(5).collect();
        debug!(count = ids.len(), ?sample, source = source_label, "Allow-list loaded");

        Ok(Self { ids })
    }

    /// Membership test (case-sensitive exact match).
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of identifiers in the list.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(content: &str) -> FeedResult<AllowList> {
        AllowList::from_reader(Cursor::new(content), "test.csv")
    }

    #[test]
    fn test_loads_and_trims_identifiers() {
        let list = load("# Artikelnummer,Name\n A1 ,Widget\nB2,Gadget\n").unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.contains("A1"));
        assert!(list.contains("B2"));
    }

    #[test]
    fn test_deduplicates() {
        let list = load("# Artikelnummer\nA1\nA1\nA1\n").unwrap();

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_drops_empty_values() {
        let list = load("# Artikelnummer,Name\n,NoNumber\nA1,Widget\n  ,Spaces\n").unwrap();

        assert_eq!(list.len(), 1);
        assert!(list.contains("A1"));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let list = load("# Artikelnummer\nA1\n").unwrap();

        assert!(list.contains("A1"));
        assert!(!list.contains("a1"));
    }

    #[test]
    fn test_missing_target_column_yields_empty_set() {
        let list = load("Artikel,Name\nA1,Widget\n").unwrap();

        assert!(list.is_empty());
    }

    #[test]
    fn test_missing_header_is_error() {
        let err = load("").unwrap_err();

        assert!(matches!(err, FeedError::MissingHeader { .. }));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let list = load("Name,# Artikelnummer,Price\nWidget,A1,9.99\n").unwrap();

        assert_eq!(list.len(), 1);
        assert!(list.contains("A1"));
    }
}
