//! Run statistics accumulated over one feed pass.

use serde::{Deserialize, Serialize};

/// Counters for one processing run.
///
/// An explicit accumulator returned from the processing call, not
/// process-wide state. After a full pass,
/// `total_rows == skipped_no_url + skipped_not_in_list + processed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Feed rows seen.
    pub total_rows: u64,
    /// Rows skipped because the identifier or URL field was empty.
    pub skipped_no_url: u64,
    /// Rows skipped because the identifier is not in the allow-list.
    pub skipped_not_in_list: u64,
    /// Rows for which extraction was attempted.
    pub processed: u64,
}

impl RunStats {
    /// Create a zeroed accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the counter invariant after a full pass.
    pub fn is_consistent(&self) -> bool {
        self.total_rows == self.skipped_no_url + self.skipped_not_in_list + self.processed
    }
}
