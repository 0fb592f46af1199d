//! Scan command implementation.
//!
//! The `gapscan scan` command resolves settings, streams the input through
//! a [`GapScanner`] and writes each gap as it is found.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::config::{load_config, ScanSettings};
use crate::error::{GapscanError, Result};
use crate::report::ReportFormatter;
use crate::scan::{open_reader, GapScanner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(project_root: &Path, args: ScanArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: None,
            args,
        }
    }

    /// Load settings from `path` instead of `.gapscan.yml`.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ScanArgs {
        &self.args
    }

    /// Resolve settings from defaults, config file and arguments.
    pub fn settings(&self) -> Result<ScanSettings> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        let settings = ScanSettings::resolve(&self.project_root, &config, &self.args.overrides());
        tracing::debug!("Resolved scan settings: {:?}", settings);
        Ok(settings)
    }

    fn open_input(settings: &ScanSettings) -> Result<Box<dyn BufRead>> {
        if settings.reads_stdin() {
            Ok(Box::new(std::io::stdin().lock()))
        } else {
            Ok(Box::new(open_reader(&settings.input)?))
        }
    }

    /// Send formatter output to the UI one line at a time.
    fn emit(ui: &mut dyn UserInterface, buf: &mut Vec<u8>) {
        for line in String::from_utf8_lossy(buf).lines() {
            ui.message(line);
        }
        buf.clear();
    }

    fn run(
        &self,
        settings: &ScanSettings,
        reader: Box<dyn BufRead>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let mut scanner = GapScanner::new(reader).with_mode(settings.sentinel);
        let mut formatter: Box<dyn ReportFormatter> = settings
            .format
            .formatter(ui.output_mode().shows_details());
        let mut buf = Vec::new();

        for item in scanner.by_ref() {
            match item {
                Ok(gap) => {
                    formatter.gap(&gap, &mut buf)?;
                    Self::emit(ui, &mut buf);
                }
                Err(e @ GapscanError::ParseError { .. }) => {
                    ui.error(&e.to_string());
                    return Ok(CommandResult::failure(1));
                }
                Err(e) => return Err(e),
            }
        }

        let summary = scanner.summary();
        formatter.finish(&summary, &mut buf)?;
        Self::emit(ui, &mut buf);

        tracing::debug!(
            "Scanned {} records in {} mode, {} gaps",
            summary.records,
            settings.sentinel,
            summary.gaps
        );

        if let Some(line) = scanner.idle_from() {
            ui.warning(&format!(
                "Running sum reached zero before line {}; later records were not checked \
                 (use --sentinel explicit to check them)",
                line
            ));
        }

        if settings.fail_on_gap && summary.gaps > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = match self.settings() {
            Ok(s) => s,
            Err(GapscanError::ConfigParseError { path, message }) => {
                ui.error(&format!("Parse error in {}: {}", path.display(), message));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let reader = match Self::open_input(&settings) {
            Ok(r) => r,
            Err(GapscanError::InputNotFound { path }) => {
                ui.error(&format!("Input not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        self.run(&settings, reader, ui)
    }
}
