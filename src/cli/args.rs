//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SettingsOverrides;
use crate::report::OutputFormat;
use crate::scan::SentinelMode;

/// gapscan - Find gaps in offset/length sequence logs.
#[derive(Debug, Parser)]
#[command(name = "gapscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .gapscan.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show expected/found values and a summary
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print gap lines only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a file for sequence gaps (default if no command specified)
    Scan(ScanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ScanArgs {
    /// File to scan, or `-` for stdin [default: test.txt]
    pub input: Option<PathBuf>,

    /// How a running sum of zero is treated
    #[arg(long, value_enum, env = "GAPSCAN_SENTINEL")]
    pub sentinel: Option<SentinelMode>,

    /// Output format
    #[arg(long, value_enum, env = "GAPSCAN_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Exit with status 1 when any gap is found
    #[arg(long)]
    pub fail_on_gap: bool,
}

impl ScanArgs {
    /// Command-line values that override the config file.
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            input: self.input.clone(),
            sentinel: self.sentinel,
            format: self.format,
            fail_on_gap: self.fail_on_gap,
        }
    }

    /// Scan arguments for a bare `gapscan` with no subcommand.
    ///
    /// Runs the `scan` argument definitions through clap with no flags, so
    /// only the `GAPSCAN_*` environment variables contribute values.
    pub fn from_env() -> Result<Self, clap::Error> {
        let cmd = <Self as clap::Args>::augment_args(clap::Command::new("scan"));
        let matches = cmd.try_get_matches_from(["scan"])?;
        <Self as clap::FromArgMatches>::from_arg_matches(&matches)
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
