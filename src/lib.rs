//! gapscan - sequence gap detection for offset/length logs.
//!
//! Each input line holds two integers `a b`. In a consistent log every
//! line's `a` equals the previous line's `a + b`; gapscan reports the
//! 1-based line numbers where that does not hold.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.gapscan.yml` loading and settings resolution
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human and JSON output formatters
//! - [`scan`] - Record parsing and the streaming gap scanner
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use gapscan::scan::{GapScanner, SentinelMode};
//!
//! let input = Cursor::new("0 10\n10 5\n20 1\n");
//! let lines: Vec<usize> = GapScanner::new(input)
//!     .with_mode(SentinelMode::Explicit)
//!     .map(|gap| gap.unwrap().line)
//!     .collect();
//! assert_eq!(lines, vec![3]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scan;
pub mod ui;

pub use error::{GapscanError, Result};
