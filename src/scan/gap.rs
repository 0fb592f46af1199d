//! Scan results.

use serde::Serialize;

/// A line whose first field does not match the carried expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gap {
    /// 1-based line number.
    pub line: usize,
    /// Sum of the previous record's fields.
    pub expected: i128,
    /// First field of this record.
    pub found: i64,
}

impl Gap {
    /// Signed distance between what was found and what was expected.
    pub fn delta(&self) -> i128 {
        i128::from(self.found) - self.expected
    }
}

/// Totals for a completed scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Number of records read.
    pub records: usize,
    /// Number of gaps reported.
    pub gaps: usize,
}
