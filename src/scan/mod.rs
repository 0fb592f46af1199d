//! Sequence gap detection.
//!
//! Each input line carries a pair `a b`. A well-formed log satisfies
//! `a == a_prev + b_prev` for every line after the first; the lines where
//! that fails are gaps.
//!
//! - [`Record`] - One parsed line
//! - [`GapScanner`] - Lazy iterator over the gaps of a [`BufRead`](std::io::BufRead)
//! - [`SentinelMode`] - How a running sum of zero is treated
//! - [`Gap`] / [`ScanSummary`] - Scan results
//!
//! # Example
//!
//! ```
//! use gapscan::scan::{scan_str, SentinelMode};
//!
//! let gaps = scan_str("1 2\n4 1\n5 10\n", SentinelMode::Zero).unwrap();
//! let lines: Vec<usize> = gaps.iter().map(|g| g.line).collect();
//! assert_eq!(lines, vec![2]);
//! ```

pub mod gap;
pub mod mode;
pub mod record;
pub mod scanner;

pub use gap::{Gap, ScanSummary};
pub use mode::SentinelMode;
pub use record::Record;
pub use scanner::{open_reader, scan_str, GapScanner};
