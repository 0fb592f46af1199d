//! JSON output formatter.
//!
//! Formats scan results as machine-readable JSON for tooling integration.

use serde::Serialize;
use std::io::Write;

use super::ReportFormatter;
use crate::scan::{Gap, ScanSummary};

/// Formats scan output as JSON.
///
/// Gaps are buffered until [`ReportFormatter::finish`], so nothing is
/// written for a scan that aborts.
#[derive(Debug, Default)]
pub struct JsonFormatter {
    gaps: Vec<Gap>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    gaps: &'a [Gap],
    summary: &'a ScanSummary,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportFormatter for JsonFormatter {
    fn gap(&mut self, gap: &Gap, _writer: &mut dyn Write) -> std::io::Result<()> {
        self.gaps.push(*gap);
        Ok(())
    }

    fn finish(&mut self, summary: &ScanSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            gaps: &self.gaps,
            summary,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(gaps: &[Gap], summary: ScanSummary) -> serde_json::Value {
        let mut formatter = JsonFormatter::new();
        let mut output = Vec::new();
        for gap in gaps {
            formatter.gap(gap, &mut output).unwrap();
        }
        assert!(output.is_empty(), "gaps are buffered until finish");
        formatter.finish(&summary, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let parsed = render(
            &[Gap {
                line: 2,
                expected: 3,
                found: 4,
            }],
            ScanSummary {
                records: 3,
                gaps: 1,
            },
        );

        insta::assert_json_snapshot!(parsed, @r#"
        {
          "gaps": [
            {
              "expected": 3,
              "found": 4,
              "line": 2
            }
          ],
          "summary": {
            "gaps": 1,
            "records": 3
          }
        }
        "#);
    }

    #[test]
    fn empty_scan_has_empty_gap_list() {
        let parsed = render(&[], ScanSummary::default());
        assert!(parsed["gaps"].as_array().unwrap().is_empty());
        assert_eq!(parsed["summary"]["records"], 0);
    }

    #[test]
    fn negative_values_are_preserved() {
        let parsed = render(
            &[Gap {
                line: 5,
                expected: -7,
                found: -2,
            }],
            ScanSummary {
                records: 5,
                gaps: 1,
            },
        );
        assert_eq!(parsed["gaps"][0]["expected"], -7);
        assert_eq!(parsed["gaps"][0]["found"], -2);
    }
}
