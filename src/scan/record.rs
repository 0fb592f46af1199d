//! Record parsing.

use crate::error::{GapscanError, Result};

/// One parsed input line: an ordered pair of integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// First field, checked against the running expectation.
    pub a: i64,
    /// Second field, added to `a` to form the next expectation.
    pub b: i64,
}

impl Record {
    /// Create a record from its two fields.
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// Parse a line of exactly two whitespace-separated base-10 integers.
    ///
    /// `line_number` is only used for error reporting. Each field must fit
    /// in an `i64`; a well-formed integer outside that range is rejected
    /// like any other bad token.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the line has any other number of tokens or
    /// either token is not an integer in `i64` range.
    pub fn parse(line: &str, line_number: usize) -> Result<Self> {
        let fail = |message: String| GapscanError::ParseError {
            line: line_number,
            content: line.to_string(),
            message,
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [a, b] = tokens.as_slice() else {
            return Err(fail(format!("expected 2 fields, found {}", tokens.len())));
        };

        let a = a
            .parse::<i64>()
            .map_err(|e| fail(format!("invalid integer {:?}: {}", a, e)))?;
        let b = b
            .parse::<i64>()
            .map_err(|e| fail(format!("invalid integer {:?}: {}", b, e)))?;

        Ok(Self { a, b })
    }

    /// The value the next record's `a` is expected to have.
    pub fn sum(&self) -> i128 {
        i128::from(self.a) + i128::from(self.b)
    }
}
