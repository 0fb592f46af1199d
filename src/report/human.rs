//! Human-readable output formatter.
//!
//! Prints one line number per gap. Detailed mode appends the expected and
//! found values and ends with a summary line.

use std::io::Write;

use super::ReportFormatter;
use crate::scan::{Gap, ScanSummary};

/// Formats scan output for human consumption.
pub struct HumanFormatter {
    /// Whether to include values and a summary.
    pub detailed: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }
}

impl ReportFormatter for HumanFormatter {
    fn gap(&mut self, gap: &Gap, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.detailed {
            writeln!(
                writer,
                "{}: expected {}, found {} ({:+})",
                gap.line,
                gap.expected,
                gap.found,
                gap.delta()
            )
        } else {
            writeln!(writer, "{}", gap.line)
        }
    }

    fn finish(&mut self, summary: &ScanSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        if !self.detailed {
            return Ok(());
        }

        let noun = if summary.records == 1 {
            "record"
        } else {
            "records"
        };
        match summary.gaps {
            0 => writeln!(writer, "Scanned {} {}, no gaps", summary.records, noun),
            1 => writeln!(writer, "Scanned {} {}, 1 gap", summary.records, noun),
            n => writeln!(writer, "Scanned {} {}, {} gaps", summary.records, noun, n),
        }
    }
}
