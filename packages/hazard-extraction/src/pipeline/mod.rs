//! Feed processing pipeline - the core of the library.
//!
//! The pipeline orchestrates, per feed row:
//! - Eligibility filtering (identifier + URL present, allow-list member)
//! - Fetch → extract → scan, strictly sequential
//! - One output record per processed row
//! - Run statistics

pub mod process;

pub use process::{process_feed, process_rows};
