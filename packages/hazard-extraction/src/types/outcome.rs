//! Per-product extraction outcome.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Tagged outcome for one processed product.
///
/// Exactly one variant holds per processed row, and each has exactly
/// one serialized form in the output (via `Display`): comma-joined
/// codes, the literal `none`, or `error: <reason>`.
///
/// `NoCodesFound` is distinct from failure: a datasheet without any
/// extractable text scans the same as one whose text simply contains
/// no codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionOutcome {
    /// Sorted, deduplicated codes found in the datasheet text.
    Codes(BTreeSet<String>),
    /// The datasheet was fetched and parsed but contained no codes.
    NoCodesFound,
    /// Fetch or extraction failed for this row; the run continues.
    Failed(String),
}

impl ExtractionOutcome {
    /// Build an outcome from scanned codes, mapping an empty set to
    /// `NoCodesFound`.
    pub fn from_codes(codes: BTreeSet<String>) -> Self {
        if codes.is_empty() {
            Self::NoCodesFound
        } else {
            Self::Codes(codes)
        }
    }

    /// Whether this outcome records a per-row failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl fmt::Display for ExtractionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codes(codes) => {
                let joined: Vec<&str> = codes.iter().map(String::as_str).collect();
                write!(f, "{}", joined.join(","))
            }
            Self::NoCodesFound => write!(f, "none"),
            Self::Failed(reason) => write!(f, "error: {}", reason),
        }
    }
}
