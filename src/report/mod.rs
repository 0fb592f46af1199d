//! Scan report formatters.
//!
//! This module provides formatters for writing gaps in different formats
//! (human-readable, JSON). Formatters receive gaps one at a time so the
//! human format can stream while the scan is still running.

pub mod human;
pub mod json;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scan::{Gap, ScanSummary};

/// Output format for scan results.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line number per line.
    #[default]
    Human,
    /// A single JSON document written when the scan completes.
    Json,
}

impl OutputFormat {
    /// Build the formatter for this format.
    ///
    /// `detailed` adds expected/found values and a summary to human output.
    pub fn formatter(&self, detailed: bool) -> Box<dyn ReportFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter::new(detailed)),
            Self::Json => Box::new(JsonFormatter::new()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("human"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Trait for formatting scan output.
pub trait ReportFormatter {
    /// Called once per gap, in line order.
    fn gap(&mut self, gap: &Gap, writer: &mut dyn Write) -> std::io::Result<()>;

    /// Called once after the scan completes successfully.
    fn finish(&mut self, summary: &ScanSummary, writer: &mut dyn Write) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
