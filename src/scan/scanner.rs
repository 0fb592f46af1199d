//! Streaming gap scanner.
//!
//! [`GapScanner`] reads one line at a time and yields each [`Gap`] as soon
//! as it is found. Reopening the input restarts the scan.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Lines};
use std::iter::FusedIterator;
use std::path::Path;

use crate::error::{GapscanError, Result};

use super::gap::{Gap, ScanSummary};
use super::mode::SentinelMode;
use super::record::Record;

/// Lazy iterator over the gaps in a line-oriented input.
///
/// Yields `Err` at most once: after a parse or read failure the iterator
/// is exhausted.
pub struct GapScanner<R> {
    lines: Lines<R>,
    mode: SentinelMode,
    last: Option<i128>,
    line: usize,
    records: usize,
    gaps: usize,
    idle_from: Option<usize>,
    done: bool,
}

impl<R: BufRead> GapScanner<R> {
    /// Create a scanner over `reader` in the default sentinel mode.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            mode: SentinelMode::default(),
            last: None,
            line: 0,
            records: 0,
            gaps: 0,
            idle_from: None,
            done: false,
        }
    }

    /// Set the sentinel mode.
    pub fn with_mode(mut self, mode: SentinelMode) -> Self {
        self.mode = mode;
        self
    }

    /// The active sentinel mode.
    pub fn mode(&self) -> SentinelMode {
        self.mode
    }

    /// Number of records parsed so far.
    pub fn records_scanned(&self) -> usize {
        self.records
    }

    /// First line that went unchecked because the running sum was zero.
    ///
    /// Always `None` in [`SentinelMode::Explicit`].
    pub fn idle_from(&self) -> Option<usize> {
        self.idle_from
    }

    /// Totals for the lines consumed so far.
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            records: self.records,
            gaps: self.gaps,
        }
    }

    /// Fold one record into the running state.
    fn observe(&mut self, record: Record) -> Option<Gap> {
        match self.last {
            None => {
                self.last = Some(record.sum());
                None
            }
            Some(0) if self.mode == SentinelMode::Zero => {
                self.idle_from.get_or_insert(self.line);
                None
            }
            Some(expected) => {
                self.last = Some(record.sum());
                (i128::from(record.a) != expected).then_some(Gap {
                    line: self.line,
                    expected,
                    found: record.a,
                })
            }
        }
    }

    fn abort(&mut self, err: GapscanError) -> Option<Result<Gap>> {
        tracing::debug!("Scan aborted after {} records: {}", self.records, err);
        self.done = true;
        Some(Err(err))
    }
}

impl GapScanner<BufReader<File>> {
    /// Open a file for scanning.
    ///
    /// # Errors
    ///
    /// Returns `InputNotFound` if the file doesn't exist.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(open_reader(path)?))
    }
}

/// Open `path` as a buffered reader.
///
/// # Errors
///
/// Returns `InputNotFound` if the file doesn't exist.
pub fn open_reader(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GapscanError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GapscanError::Io(e)
        }
    })?;
    Ok(BufReader::new(file))
}

impl<R: BufRead> Iterator for GapScanner<R> {
    type Item = Result<Gap>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let raw = match self.lines.next() {
                Some(Ok(raw)) => raw,
                Some(Err(e)) => return self.abort(GapscanError::Io(e)),
                None => {
                    self.done = true;
                    return None;
                }
            };
            self.line += 1;

            let record = match Record::parse(&raw, self.line) {
                Ok(record) => record,
                Err(e) => return self.abort(e),
            };
            self.records += 1;

            if let Some(gap) = self.observe(record) {
                self.gaps += 1;
                tracing::debug!(
                    "Gap at line {}: expected {}, found {}",
                    gap.line,
                    gap.expected,
                    gap.found
                );
                return Some(Ok(gap));
            }
        }
    }
}

impl<R: BufRead> FusedIterator for GapScanner<R> {}

/// Scan an in-memory string and collect every gap.
///
/// # Errors
///
/// Returns the first `ParseError`; gaps found before it are discarded.
pub fn scan_str(input: &str, mode: SentinelMode) -> Result<Vec<Gap>> {
    GapScanner::new(Cursor::new(input)).with_mode(mode).collect()
}
