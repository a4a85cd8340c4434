//! Hazard statement code scanner.

use regex::Regex;
use std::collections::BTreeSet;

/// Matches hazard statement codes ("H-codes") in free text.
///
/// A code is the letter `H` followed by exactly three digits and an
/// optional single trailing letter, as a standalone word: `H314` and
/// `H412A` match, while `CH300`, `H31` and `H3145` do not. Word
/// boundaries on both sides keep a code from matching inside a longer
/// alphanumeric token.
pub struct HazardCodeScanner {
    pattern: Regex,
}

impl Default for HazardCodeScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl HazardCodeScanner {
    /// Create a scanner with the hazard-code pattern compiled.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"\bH\d{3}[A-Za-z]?\b").unwrap(),
        }
    }

    /// Scan `text` and return the unique codes in ascending order.
    ///
    /// Pure function: no I/O, no failure mode. Absence of matches
    /// yields an empty set.
    pub fn scan(&self, text: &str) -> BTreeSet<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
